// ABOUTME: UI components for the TUI interface including the checkout wizard, landing pages, and help

pub mod checkout;
pub mod help;
pub mod landing;
pub mod layout;

pub use checkout::CheckoutComponent;
pub use help::HelpComponent;
pub use landing::LandingComponent;
pub use layout::LayoutComponent;
