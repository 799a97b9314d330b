/// Group size that earns the bonus flag on a clear
pub const BONUS_GROUP_SIZE: usize = 5;

/// Points awarded for one clear. Derived from the group size only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScoreDelta {
    pub group_size: usize,
    pub base_points: u64,
    pub multiplier: u64,
    pub points: u64,
}

impl ScoreDelta {
    /// `points = (n * 10) * max(1, n - 2)`
    pub const fn for_group_size(group_size: usize) -> Self {
        let n = group_size as u64;
        let base_points = n * 10;
        let multiplier = if n > 3 { n - 2 } else { 1 };
        Self {
            group_size,
            base_points,
            multiplier,
            points: base_points * multiplier,
        }
    }

    pub const fn is_bonus(&self) -> bool {
        self.group_size >= BONUS_GROUP_SIZE
    }
}
