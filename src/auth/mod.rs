pub mod otp;

pub use otp::{Authenticator, Role, SimulatedOtpAuthenticator};
