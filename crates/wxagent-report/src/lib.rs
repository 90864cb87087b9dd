mod mail;
mod pdf;

pub use mail::SmtpMailer;
pub use pdf::PdfRenderer;
