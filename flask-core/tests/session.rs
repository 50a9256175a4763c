use flask_core::{
    Controller, Flask, TemperatureBand, Trigger, Visibility,
    controller::{Field, InputError},
};

fn volume(controller: &Controller) -> f64 {
    controller.flask().current_volume()
}

#[test]
fn fill_to_capacity_then_drink_dry() {
    let mut controller = Controller::new(Flask::new(25.0, 250.0));

    controller.submit(Trigger::Fill, "300").unwrap();
    assert_eq!(volume(&controller), 500.0);
    assert!(controller.display().contains("Current Volume: 500.0 ml / 500.0 ml"));
    assert_eq!(
        controller.visibility(),
        Visibility {
            fill: false,
            drink: true
        }
    );

    controller.submit(Trigger::Drink, "500").unwrap();
    assert_eq!(volume(&controller), 0.0);
    assert_eq!(
        controller.visibility(),
        Visibility {
            fill: true,
            drink: false
        }
    );

    // Hidden triggers can still be driven programmatically and stay saturated.
    controller.submit(Trigger::Drink, "10").unwrap();
    assert_eq!(volume(&controller), 0.0);
    assert!(controller.display().contains("Current Volume: 0.0 ml / 500.0 ml"));
}

#[test]
fn walk_through_every_band() {
    let mut controller = Controller::default();
    assert_eq!(controller.flask().band(), TemperatureBand::RoomTemp);

    let steps = [
        (Trigger::Cool, "30", TemperatureBand::Ice, "ICE"),
        (Trigger::Heat, "5", TemperatureBand::Cool, "COOL"),
        (Trigger::Heat, "20", TemperatureBand::Cool, "COOL"),
        (Trigger::Heat, "2.5", TemperatureBand::RoomTemp, "ROOM"),
        (Trigger::Heat, "15", TemperatureBand::Warm, "WARM"),
        (Trigger::Heat, "5.5", TemperatureBand::Hot, "HOT!"),
    ];

    for (trigger, amount, band, label) in steps {
        controller.submit(trigger, amount).unwrap();
        assert_eq!(controller.flask().band(), band, "after {trigger} {amount}");
        assert!(controller.display().contains(label));
    }

    assert_eq!(controller.flask().temperature(), 43.0);
}

#[test]
fn malformed_input_is_reported_and_recovered() {
    let mut controller = Controller::default();
    let shown = controller.display().to_owned();

    let err = controller.submit(Trigger::Heat, "").unwrap_err();
    assert_eq!(
        err,
        &InputError::Empty {
            field: Field::Temperature
        }
    );
    assert_eq!(controller.display(), shown);

    let err = controller.submit(Trigger::Drink, "a sip").unwrap_err();
    assert_eq!(err.field(), Field::Volume);
    assert_eq!(err.to_string(), "`a sip` is not a valid volume amount");
    assert!(controller.error().is_some());

    controller.submit(Trigger::Drink, " 50 ").unwrap();
    assert!(controller.error().is_none());
    assert_eq!(volume(&controller), 200.0);
}
