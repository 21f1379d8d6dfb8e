pub fn min_of_2(first: f64, second: f64) -> f64 {
    if first < second {
        first
    } else {
        second
    }
}

pub fn max_of_2(first: f64, second: f64) -> f64 {
    if first > second {
        first
    } else {
        second
    }
}
