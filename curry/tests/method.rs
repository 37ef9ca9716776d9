struct Tally {
    base: i32,
}

impl Tally {
    #[curry::curry]
    fn new(base: i32, bump: i32) -> Self {
        Tally { base: base + bump }
    }

    #[curry::curry]
    fn plus(self, x: i32, y: i32) -> i32 {
        self.base + x + y
    }
}

#[test]
fn constructors_and_methods_curry_too() {
    let tally = Tally::new(2)(4);
    assert_eq!(tally.plus(8)(10), 24);
}
