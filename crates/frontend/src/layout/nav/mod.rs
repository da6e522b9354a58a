mod navbar;
mod section_dropdown;

pub use navbar::Navbar;
