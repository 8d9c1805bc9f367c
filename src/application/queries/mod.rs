pub mod monuments;
