pub mod carousel;
pub mod controls;
pub mod navigator;
pub mod options;
pub mod panel;
