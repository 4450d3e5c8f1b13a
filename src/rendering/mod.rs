pub mod gradient;
