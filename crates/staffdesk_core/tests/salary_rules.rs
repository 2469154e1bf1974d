use staffdesk_core::{
    EmployeeId, InMemoryStaffRepository, NewEmployee, Seniority, StaffingError, StaffingService,
};

fn service() -> StaffingService<InMemoryStaffRepository> {
    StaffingService::new(InMemoryStaffRepository::new())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn hire_developer(
    service: &mut StaffingService<InMemoryStaffRepository>,
    name: &str,
    base: f64,
    level: Option<Seniority>,
) -> EmployeeId {
    service
        .hire(NewEmployee::developer(name, base, level, strings(&["Rust"])))
        .expect("hire developer")
}

fn hire_designer(
    service: &mut StaffingService<InMemoryStaffRepository>,
    name: &str,
    base: f64,
    tools: &[&str],
) -> EmployeeId {
    service
        .hire(NewEmployee::designer(name, base, strings(tools), None))
        .expect("hire designer")
}

#[test]
fn developer_salary_adds_level_bonus() {
    let mut service = service();
    let cases = [
        (None, 2000.0),
        (Some(Seniority::Junior), 2200.0),
        (Some(Seniority::SemiSenior), 2500.0),
        (Some(Seniority::Senior), 3000.0),
    ];

    for (level, expected) in cases {
        let id = hire_developer(&mut service, "dev", 2000.0, level);
        assert_eq!(service.calculate_salary(id).unwrap(), expected);
    }
}

#[test]
fn designer_salary_follows_tool_bonus_policy() {
    let mut service = service();

    let figma = hire_designer(&mut service, "Figma only", 2000.0, &["Figma"]);
    let photoshop = hire_designer(&mut service, "Photoshop only", 2000.0, &["Photoshop"]);
    let full = hire_designer(
        &mut service,
        "Full kit",
        2000.0,
        &["Figma", "Photoshop", "Illustrator"],
    );
    let lowercase = hire_designer(&mut service, "Lowercase", 2000.0, &["figma"]);
    let none = hire_designer(&mut service, "Sketch", 2000.0, &["Sketch"]);

    assert_eq!(service.calculate_salary(figma).unwrap(), 2300.0);
    assert_eq!(service.calculate_salary(photoshop).unwrap(), 2200.0);
    assert_eq!(service.calculate_salary(full).unwrap(), 2700.0);
    assert_eq!(service.calculate_salary(lowercase).unwrap(), 2300.0);
    assert_eq!(service.calculate_salary(none).unwrap(), 2000.0);
}

#[test]
fn manager_salary_adds_share_of_team_salaries() {
    let mut service = service();
    let boss = service
        .hire(NewEmployee::manager("Diego", 3000.0, "IT"))
        .unwrap();
    let ana = hire_developer(&mut service, "Ana", 2500.0, Some(Seniority::Senior));
    let beto = hire_developer(&mut service, "Beto", 1500.0, Some(Seniority::Junior));
    let dina = hire_designer(&mut service, "Dina", 2000.0, &["Figma", "PS"]);

    assert_eq!(service.calculate_salary(boss).unwrap(), 3000.0);

    for member in [ana, beto, dina] {
        service.add_to_team(boss, member).unwrap();
    }

    // Team: 3500 + 1700 + 2300 = 7500; 15% of that is 1125.
    assert_close(service.calculate_salary(boss).unwrap(), 4125.0);
}

#[test]
fn manager_salary_tracks_report_changes_without_caching() {
    let mut service = service();
    let boss = service
        .hire(NewEmployee::manager("Diana", 5000.0, "Product"))
        .unwrap();
    let dev = hire_developer(&mut service, "Andres", 4000.0, Some(Seniority::Junior));
    service.add_to_team(boss, dev).unwrap();

    assert_close(service.calculate_salary(boss).unwrap(), 5000.0 + 4200.0 * 0.15);

    service.set_seniority(dev, Some(Seniority::Senior)).unwrap();
    assert_close(service.calculate_salary(boss).unwrap(), 5000.0 + 5000.0 * 0.15);

    service.set_base_salary(dev, 6000.0).unwrap();
    assert_close(service.calculate_salary(boss).unwrap(), 5000.0 + 7000.0 * 0.15);

    // Clearing the level drops the developer bonus and the manager's share of it.
    service.set_seniority(dev, None).unwrap();
    assert_eq!(service.calculate_salary(dev).unwrap(), 6000.0);
    assert_close(service.calculate_salary(boss).unwrap(), 5000.0 + 6000.0 * 0.15);
}

#[test]
fn salary_queries_are_repeatable() {
    let mut service = service();
    let boss = service
        .hire(NewEmployee::manager("Diego", 3000.0, "IT"))
        .unwrap();
    let dev = hire_developer(&mut service, "Ana", 2500.0, Some(Seniority::Senior));
    service.add_to_team(boss, dev).unwrap();

    let first = service.calculate_salary(boss).unwrap();
    for _ in 0..5 {
        assert_eq!(service.calculate_salary(boss).unwrap(), first);
    }
}

#[test]
fn set_seniority_rejects_non_developers() {
    let mut service = service();
    let designer = hire_designer(&mut service, "Dina", 2000.0, &["Figma"]);

    let err = service
        .set_seniority(designer, Some(Seniority::Senior))
        .unwrap_err();
    assert!(matches!(err, StaffingError::RoleNotEligible { .. }));
    assert_eq!(service.calculate_salary(designer).unwrap(), 2300.0);
}

#[test]
fn set_base_salary_rejects_negative_amounts() {
    let mut service = service();
    let dev = hire_developer(&mut service, "Ana", 2500.0, None);

    let err = service.set_base_salary(dev, -10.0).unwrap_err();
    assert!(matches!(err, StaffingError::InvalidEmployee(_)));
    assert_eq!(service.calculate_salary(dev).unwrap(), 2500.0);
}

#[test]
fn set_base_salary_rejects_zero() {
    let mut service = service();
    let dev = hire_developer(&mut service, "Ana", 2500.0, Some(Seniority::Senior));

    let err = service.set_base_salary(dev, 0.0).unwrap_err();
    assert!(matches!(err, StaffingError::InvalidEmployee(_)));
    assert_eq!(service.employee(dev).unwrap().base_salary(), 2500.0);
    assert_eq!(service.calculate_salary(dev).unwrap(), 3500.0);

    let err = service.set_base_salary(dev, f64::NAN).unwrap_err();
    assert!(matches!(err, StaffingError::InvalidEmployee(_)));
}

#[test]
fn salary_of_unknown_employee_is_an_error() {
    let service = service();
    let err = service.calculate_salary(EmployeeId(42)).unwrap_err();
    assert_eq!(err, StaffingError::EmployeeNotFound(EmployeeId(42)));
}
