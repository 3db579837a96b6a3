/// This module contains the sequence database model.
pub mod sequence;
