pub mod recall;
