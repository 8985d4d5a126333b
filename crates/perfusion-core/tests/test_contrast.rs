use perfusion_core::error::PerfusionError;
use perfusion_core::io::contrast::ContrastAgent;

#[test]
fn test_parse_name_and_dose() {
    let agent = ContrastAgent::parse("Gadobutrol\n0.1\n").unwrap();
    assert_eq!(agent.name, "Gadobutrol");
    assert_eq!(agent.dose, 0.1);
}

#[test]
fn test_name_may_contain_spaces() {
    let agent = ContrastAgent::parse("Gd-DTPA (Magnevist)\n  15.5 mmol\n").unwrap();
    assert_eq!(agent.name, "Gd-DTPA (Magnevist)");
    assert_eq!(agent.dose, 15.5);
}

#[test]
fn test_missing_name_rejected() {
    assert!(matches!(
        ContrastAgent::parse("\n0.1\n"),
        Err(PerfusionError::InvalidContrastAgent(_))
    ));
    assert!(matches!(
        ContrastAgent::parse(""),
        Err(PerfusionError::InvalidContrastAgent(_))
    ));
}

#[test]
fn test_missing_or_invalid_dose_rejected() {
    for text in ["Agent\n", "Agent\nabc\n", "Agent\n0\n", "Agent\n-2.5\n", "Agent\nNaN\n"] {
        assert!(
            matches!(
                ContrastAgent::parse(text),
                Err(PerfusionError::InvalidContrastAgent(_))
            ),
            "accepted {text:?}"
        );
    }
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contrast_info.txt");
    std::fs::write(&path, "Gadoterate\n0.2\n").unwrap();

    let agent = ContrastAgent::load(&path).unwrap();
    assert_eq!(
        agent,
        ContrastAgent {
            name: "Gadoterate".into(),
            dose: 0.2
        }
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContrastAgent::load(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, PerfusionError::Io(_)));
}
