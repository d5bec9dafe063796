pub mod rst;
