pub mod cta;
pub mod faq;
pub mod features;
pub mod heading;
pub mod hero;
pub mod nav;
pub mod pricing;
pub mod stats;
