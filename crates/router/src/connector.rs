pub mod gemini;
pub mod stripe;

pub use self::{gemini::Gemini, stripe::Stripe};
