/// Starting budget of a freshly created club, in whole currency units.
pub const DEFAULT_CLUB_BUDGET: i64 = 100_000_000;

/// Default club color.
pub const DEFAULT_CLUB_COLOR: &str = "#00ffff";

/// Budget credited to a club for every simulated win.
pub const MATCH_WIN_REWARD: i64 = 500_000;
