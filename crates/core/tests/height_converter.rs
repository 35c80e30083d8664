//! Integration test for `HeightConverter` driven through text entry
use approx::assert_relative_eq;
use isa_atmos_core::{
    ConverterError, ConverterField, HeightConverter, Kilometers, StandardAtmosphere, KM2KFT,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_every_field_agrees_after_each_edit() {
    let isa = StandardAtmosphere::new();
    let mut converter = HeightConverter::new(&isa);

    let edits = [
        (ConverterField::Kilometers, "16.5"),
        (ConverterField::Kilofeet, "45"),
        (ConverterField::Hectopascals, "250"),
        (ConverterField::PotentialTemperature, "600"),
    ];

    for (field, text) in edits {
        let readout = *converter.set_text(field, text).unwrap();

        // kft and km must describe the same altitude
        assert_relative_eq!(*readout.kilofeet, *readout.kilometers * KM2KFT, max_relative = 1e-12);

        // The rest of the readout must be the forward state at that altitude
        let state = isa.from_kilometers(readout.kilometers).unwrap();
        assert_relative_eq!(*readout.hectopascals, *state.hectopascals(), max_relative = 1e-6);
        assert_relative_eq!(*readout.temperature, *state.temperature, epsilon = 1e-3);
        assert_relative_eq!(
            *readout.potential_temperature,
            *state.potential_temperature,
            max_relative = 1e-6
        );
    }
}

#[test]
fn test_rejected_edits_leave_readout_untouched() {
    let mut converter = HeightConverter::default();
    converter.set_kilometers(Kilometers::new(20.0)).unwrap();
    let before = *converter.readout();

    let attempts = [
        (ConverterField::Kilometers, "-0.5"),
        (ConverterField::Kilofeet, "200"),
        (ConverterField::Hectopascals, "1020"),
        (ConverterField::Hectopascals, "1.0"),
        (ConverterField::PotentialTemperature, "250"),
        (ConverterField::Kilometers, ""),
    ];
    for (field, text) in attempts {
        let err = converter.set_text(field, text).unwrap_err();
        match (text, err) {
            ("", ConverterError::Parse { field: rejected, .. }) => assert_eq!(rejected, field),
            ("", other) => panic!("expected parse error, got {other}"),
            (_, ConverterError::Atmosphere(_)) => {}
            (_, other) => panic!("expected range error for '{text}', got {other}"),
        }
        assert_eq!(*converter.readout(), before);
    }
}

#[test]
fn test_negative_zero_text_is_accepted() {
    let mut converter = HeightConverter::default();
    converter.set_kilometers(Kilometers::new(10.0)).unwrap();

    let readout = *converter.set_text(ConverterField::Kilometers, "-0").unwrap();
    assert_eq!(*readout.kilometers, 0.0);
    assert_relative_eq!(*readout.hectopascals, 1013.25, epsilon = 1e-9);

    let readout = *converter.set_text(ConverterField::Kilofeet, "-0.0").unwrap();
    assert_eq!(*readout.kilofeet, 0.0);
}
