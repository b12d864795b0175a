//! Business logic behind the HTTP handlers

pub mod booking;

pub use booking::{book_appointment, Booking, BookingRequest, ClientRef};
