pub mod qr_code;

pub use qr_code::Entity as QrCodeEntity;
