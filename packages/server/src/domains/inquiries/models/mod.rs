pub mod inquiry;

pub use inquiry::{Inquiry, InquiryError, InquiryStatus, NewInquiry};
