pub mod booking;
pub mod service;

pub use booking::{Booking, BookingDraft, BookingStatus, CreateBookingRequest};
pub use service::Service;
