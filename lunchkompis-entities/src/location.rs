use crate::{address::*, geo::*};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub pos: Option<MapPoint>,
    pub address: Address,
}
