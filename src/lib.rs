pub mod adjustments;
pub mod group;
pub mod group_data;
pub mod simulate;
pub mod win_prob;
