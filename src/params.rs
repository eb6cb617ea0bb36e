/// Maximum number of creatures on a team
pub const TEAM_SIZE: usize = 6;

/// Highest base stat value; stat bars are scaled against it
pub const STAT_MAX: u32 = 255;

/// Width of a stat bar, in characters
pub const BAR_WIDTH: usize = 30;

/// Number of weak team members at which a weakness counts as major
pub const MAJOR_WEAKNESS: usize = 3;

/// Number of resisting team members at which a resistance is worth reporting
pub const STRONG_RESISTANCE: usize = 2;
