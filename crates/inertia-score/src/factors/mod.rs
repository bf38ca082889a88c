pub mod circumstantial;
pub mod cognitive;
pub mod structural;
pub mod visibility;
