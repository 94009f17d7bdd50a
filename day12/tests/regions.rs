use day12::GardenMap;

const SMALL_GARDEN: &str = "AAAA
BBCD
BBCC
EEEC";

const HOLED_GARDEN: &str = "OOOOO
OXOXO
OOOOO
OXOXO
OOOOO";

#[test]
fn small_garden_has_5_regions() {
    let map = GardenMap::try_from(SMALL_GARDEN).unwrap();

    assert_eq!(map.regions().len(), 5);
}

#[test]
fn small_garden_fence_prices() {
    let map = GardenMap::try_from(SMALL_GARDEN).unwrap();

    assert_eq!(map.total_fence_price(), 140);
    assert_eq!(map.total_discounted_fence_price(), 80);
}

#[test]
fn holed_garden_fence_prices() {
    let map = GardenMap::try_from(HOLED_GARDEN).unwrap();

    assert_eq!(map.total_fence_price(), 772);
    assert_eq!(map.total_discounted_fence_price(), 436);
}
