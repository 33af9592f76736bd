mod dice_roll;
pub mod outcome;
pub mod roller;
pub mod source;
