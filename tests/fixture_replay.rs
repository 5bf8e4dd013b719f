//! Replays the demo action script against the demo catalog.

use std::{fs, path::PathBuf};

use testresult::TestResult;

use tier_editor::{
    fixtures::{self, Fixture, StepError},
    input::{Field, InputError},
    prelude::*,
};

fn fixture() -> Fixture {
    Fixture::with_base_path(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"))
}

#[test]
fn demo_script_edits_widget() -> TestResult {
    let fixture = fixture();
    let mut catalog = fixture.catalog("demo")?;
    let steps = fixture.script("demo")?;
    let mut editor = ProductEditor::new();

    let report = replay(&steps, &mut editor, &mut catalog);

    assert_eq!(report.applied, steps.len() - 1);
    assert!(matches!(
        report.rejected.as_slice(),
        [(
            7,
            StepError::Input(InputError::NotANumber {
                field: Field::Stock,
                ..
            })
        )]
    ));

    let widget = catalog.get(&ProductId::from("p1")).ok_or("missing p1")?;
    let tiers: Vec<String> = widget.discounts.iter().map(ToString::to_string).collect();

    assert_eq!(widget.name, "Widget Plus");
    assert_eq!(widget.price, 12_000);
    assert_eq!(widget.stock, 20);
    assert_eq!(tiers, ["20+ units: 10% off", "5+ units: 2% off"]);

    assert!(!editor.state().session.is_active());
    assert!(editor.state().open.is_empty());

    Ok(())
}

#[test]
fn untouched_products_survive_replay() -> TestResult {
    let fixture = fixture();
    let original = fixture.catalog("demo")?;
    let mut catalog = original.clone();
    let steps = fixture.script("demo")?;

    replay(&steps, &mut ProductEditor::new(), &mut catalog);

    for id in ["p2", "p3"] {
        let id = ProductId::from(id);
        assert_eq!(catalog.get(&id), original.get(&id), "{id} changed");
    }

    Ok(())
}

#[test]
fn catalog_loads_from_any_path() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("catalog.yml");

    fs::write(
        &path,
        "products:\n  - id: solo\n    name: Solo\n    price: 5\n    stock: 1\n",
    )?;

    let catalog = fixtures::catalog_from_path(&path)?;

    assert_eq!(catalog.products().len(), 1);
    assert_eq!(
        catalog.get(&ProductId::from("solo")).map(|p| p.price),
        Some(5)
    );

    Ok(())
}
