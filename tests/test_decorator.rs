use catalog_composer::prelude::*;

// ------------------------------------
// 1. Literal house blend order
// ------------------------------------
#[test]
fn test_house_blend_with_milk_and_double_mocha() {
    let base = Beverage::new("House Blend", Price::from_decimal(1.99));
    let order = mocha(mocha(milk(base)));

    assert_eq!(order.cost(), Price::from_decimal(2.49));
    assert_eq!(order.cost().to_string(), "2.49");
    assert_eq!(
        order.description(),
        "House Blend, with Milk, with Mocha, with Mocha"
    );
}

// ------------------------------------
// 2. Ordering properties
// ------------------------------------
#[test]
fn test_cost_commutes_for_every_pair() {
    let base = Beverage::dark_roast();
    for a in Condiment::ALL {
        for b in Condiment::ALL {
            let ab = decorate(decorate(&base, a), b);
            let ba = decorate(decorate(&base, b), a);
            assert_eq!(ab.cost(), ba.cost(), "{a} then {b}");
        }
    }
}

#[test]
fn test_description_keeps_wrap_order() {
    let base = Beverage::house_blend();
    let order = decorate_all(
        Box::new(base),
        [Condiment::Whip, Condiment::Soy, Condiment::Milk],
    );
    assert_eq!(
        order.description(),
        "House Blend, with Whip, with Soy, with Milk"
    );
}

#[test]
fn test_double_application_adds_twice() {
    let base = Beverage::house_blend();
    let doubled = mocha(mocha(&base));
    assert_eq!(
        doubled.cost(),
        base.cost() + Condiment::Mocha.increment() * 2
    );
}

// ------------------------------------
// 3. Depth and custom links
// ------------------------------------
#[test]
fn test_deep_chain_sums_all_increments() {
    let depth = 100;
    let order = decorate_all(
        Box::new(Beverage::new("Drip", Price::ZERO)),
        std::iter::repeat_n(Condiment::Whip, depth),
    );
    assert_eq!(order.cost(), Condiment::Whip.increment() * depth as u64);
    assert_eq!(order.description().matches(", with Whip").count(), depth);
}

#[test]
fn test_custom_decorator_through_builder() {
    let order = Beverage::dark_roast()
        .decorators()
        .with(Condiment::Soy)
        .with_custom(Price::from_cents(35), ", with Vanilla")
        .with_mocha()
        .build();

    assert_eq!(order.cost(), Price::from_cents(310 + 15 + 35 + 15));
    assert_eq!(
        order.description(),
        "Dark Roast, with Soy, with Vanilla, with Mocha"
    );
}

#[test]
fn test_decorated_items_are_priceable_trait_objects() {
    let menu: Vec<Box<dyn Priceable>> = vec![
        Box::new(Beverage::house_blend()),
        Box::new(milk(Beverage::house_blend())),
        Box::new(whip(soy(Beverage::dark_roast()))),
    ];

    let total: Price = menu.iter().map(|item| item.cost()).sum();
    assert_eq!(total, Price::from_cents(199 + 219 + 335));
}
