// src/auth/otp.rs
use crate::errors::ServerError;
use serde::{Deserialize, Serialize};

pub const MOBILE_DIGITS: usize = 10;
pub const OTP_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpChallenge {
    pub mobile: String,
    pub otp_length: usize,
}

/// Identity seam. Submission and status handling never call this.
pub trait Authenticator: Send + Sync {
    fn request_otp(&self, mobile: &str) -> Result<OtpChallenge, ServerError>;
    fn verify_otp(&self, mobile: &str, otp: &str, role: Role) -> Result<User, ServerError>;
}

/// Accepts any well-formed OTP. No code is ever sent.
#[derive(Debug, Default)]
pub struct SimulatedOtpAuthenticator;

impl SimulatedOtpAuthenticator {
    /// Strip spaces and dashes, require exactly ten digits.
    pub fn normalize_mobile(mobile: &str) -> Result<String, ServerError> {
        let m: String = mobile
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if m.len() != MOBILE_DIGITS || !m.chars().all(|c| c.is_ascii_digit()) {
            return Err(ServerError::BadRequest(
                "Please enter a valid 10-digit mobile number".into(),
            ));
        }
        Ok(m)
    }
}

impl Authenticator for SimulatedOtpAuthenticator {
    fn request_otp(&self, mobile: &str) -> Result<OtpChallenge, ServerError> {
        let mobile = Self::normalize_mobile(mobile)?;
        tracing::info!("simulated OTP issued for mobile ending {}", &mobile[6..]);
        Ok(OtpChallenge {
            mobile,
            otp_length: OTP_DIGITS,
        })
    }

    fn verify_otp(&self, mobile: &str, otp: &str, role: Role) -> Result<User, ServerError> {
        let mobile = Self::normalize_mobile(mobile)?;
        let otp = otp.trim();
        if otp.len() != OTP_DIGITS || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(ServerError::Unauthorized("Invalid OTP".into()));
        }

        let user = match role {
            Role::Admin => User {
                id: "admin-1".into(),
                name: "Municipal Officer".into(),
                mobile,
                role,
            },
            Role::Citizen => User {
                id: format!("u-{mobile}"),
                name: "Concerned Citizen".into(),
                mobile,
                role,
            },
        };
        Ok(user)
    }
}
