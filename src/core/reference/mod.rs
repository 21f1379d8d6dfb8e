pub(crate) mod battery;
pub(crate) mod factors;
pub(crate) mod machines;
pub(crate) mod prices;
pub(crate) mod solar;

use crate::input::Region;

/// One value per region, in the declaration order of [`Region`]: Victoria,
/// New South Wales, Northern Territory, Australian Capital Territory,
/// Tasmania, Western Australia, South Australia, Queensland.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RegionalValues(pub(crate) [f64; 8]);

impl RegionalValues {
    pub(crate) fn get(&self, region: Region) -> f64 {
        self.0[region as usize]
    }
}
