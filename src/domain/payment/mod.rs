//! Payment (riwayat pembayaran) aggregate

pub mod model;
pub mod repository;

pub use model::{NewPayment, Payment, PaymentDetail, PaymentFilter, PaymentPage, PaymentPatch};
pub use repository::PaymentRepository;
