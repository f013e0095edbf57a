//! The four screens of the card.

mod accepted;
mod countdown;
mod intro;
mod question;

pub use accepted::AcceptedScreen;
pub use countdown::CountdownScreen;
pub use intro::IntroScreen;
pub use question::QuestionScreen;
