use staffdesk_core::{
    EmployeeId, InMemoryStaffRepository, NewEmployee, ProjectId, RoleKind, Seniority,
    StaffingError, StaffingService,
};

type Service = StaffingService<InMemoryStaffRepository>;

fn setup() -> Service {
    StaffingService::new(InMemoryStaffRepository::new())
}

fn developer(service: &mut Service, name: &str, base: f64, level: Seniority) -> EmployeeId {
    service
        .hire(NewEmployee::developer(name, base, Some(level), vec![]))
        .unwrap()
}

fn projects(service: &mut Service, count: usize) -> Vec<ProjectId> {
    (0..count)
        .map(|index| {
            service
                .create_project(format!("Project {index}"), 10_000.0)
                .unwrap()
        })
        .collect()
}

#[test]
fn add_employee_links_both_sides_in_order() {
    let mut service = setup();
    let dev = developer(&mut service, "Ana", 2500.0, Seniority::Senior);
    let ids = projects(&mut service, 2);

    service.add_employee(ids[1], dev).unwrap();
    service.add_employee(ids[0], dev).unwrap();

    let employee = service.employee(dev).unwrap();
    assert_eq!(employee.assigned_projects(), &[ids[1], ids[0]]);
    assert_eq!(service.project(ids[0]).unwrap().roster(), &[dev]);
    assert_eq!(service.project(ids[1]).unwrap().roster(), &[dev]);
}

#[test]
fn developer_fourth_project_is_rejected() {
    let mut service = setup();
    let dev = developer(&mut service, "Ana", 2500.0, Seniority::Senior);
    let ids = projects(&mut service, 4);

    for project in &ids[..3] {
        service.add_employee(*project, dev).unwrap();
    }

    let err = service.add_employee(ids[3], dev).unwrap_err();
    assert_eq!(
        err,
        StaffingError::LimitExceeded {
            employee: "Ana".to_string(),
            limit: 3,
        }
    );
    assert_eq!(service.employee(dev).unwrap().assigned_projects().len(), 3);
    assert!(service.project(ids[3]).unwrap().roster().is_empty());
}

#[test]
fn designer_third_project_is_rejected() {
    let mut service = setup();
    let designer = service
        .hire(NewEmployee::designer(
            "Dina",
            2000.0,
            vec!["Figma".to_string()],
            Some("UI".to_string()),
        ))
        .unwrap();
    let ids = projects(&mut service, 3);

    service.add_employee(ids[0], designer).unwrap();
    service.add_employee(ids[1], designer).unwrap();
    let err = service.add_employee(ids[2], designer).unwrap_err();

    assert!(matches!(err, StaffingError::LimitExceeded { limit: 2, .. }));
    assert_eq!(service.employee(designer).unwrap().assigned_projects().len(), 2);
}

#[test]
fn manager_can_never_join_a_project() {
    let mut service = setup();
    let boss = service
        .hire(NewEmployee::manager("Diego", 3000.0, "IT"))
        .unwrap();
    let dev = developer(&mut service, "Ana", 2500.0, Seniority::Junior);
    let ids = projects(&mut service, 1);
    service.add_employee(ids[0], dev).unwrap();

    for _ in 0..2 {
        let err = service.add_employee(ids[0], boss).unwrap_err();
        assert!(matches!(
            err,
            StaffingError::RoleNotEligible {
                role: RoleKind::Manager,
                ..
            }
        ));
        assert!(err.is_rule_violation());
    }
    assert_eq!(service.project(ids[0]).unwrap().roster(), &[dev]);
    assert!(service.employee(boss).unwrap().assigned_projects().is_empty());
}

#[test]
fn duplicate_assignment_is_rejected_without_changes() {
    let mut service = setup();
    let dev = developer(&mut service, "Ana", 2500.0, Seniority::Senior);
    let ids = projects(&mut service, 1);

    service.add_employee(ids[0], dev).unwrap();
    let err = service.add_employee(ids[0], dev).unwrap_err();

    assert!(matches!(err, StaffingError::DuplicateAssignment { .. }));
    assert_eq!(service.project(ids[0]).unwrap().roster().len(), 1);
    assert_eq!(service.employee(dev).unwrap().assigned_projects().len(), 1);
}

#[test]
fn limit_check_runs_before_duplicate_check() {
    let mut service = setup();
    let dev = developer(&mut service, "Ana", 2500.0, Seniority::Senior);
    let ids = projects(&mut service, 3);
    for project in &ids {
        service.add_employee(*project, dev).unwrap();
    }

    let err = service.add_employee(ids[0], dev).unwrap_err();
    assert!(matches!(err, StaffingError::LimitExceeded { .. }));
}

#[test]
fn unknown_ids_are_reported() {
    let mut service = setup();
    let dev = developer(&mut service, "Ana", 2500.0, Seniority::Senior);
    let ids = projects(&mut service, 1);

    assert_eq!(
        service.add_employee(ProjectId(99), dev).unwrap_err(),
        StaffingError::ProjectNotFound(ProjectId(99))
    );
    let err = service.add_employee(ids[0], EmployeeId(99)).unwrap_err();
    assert_eq!(err, StaffingError::EmployeeNotFound(EmployeeId(99)));
    assert!(!err.is_rule_violation());
}

#[test]
fn viability_boundary_counts_as_viable() {
    let mut service = setup();
    let first = developer(&mut service, "Ana", 6000.0, Seniority::Senior);
    let second = developer(&mut service, "Beto", 6000.0, Seniority::Senior);
    let project = service.create_project("Grande", 20_000.0).unwrap();

    service.add_employee(project, first).unwrap();
    service.add_employee(project, second).unwrap();

    let report = service.viability(project).unwrap();
    assert_eq!(report.cost_total, 14_000.0);
    assert_eq!(report.cost_limit, 14_000.0);
    assert!(report.viable);
    assert!(service.is_viable(project).unwrap());

    let third = developer(&mut service, "Caro", 0.0, Seniority::Junior);
    service.add_employee(project, third).unwrap();
    assert_eq!(service.cost_total(project).unwrap(), 14_200.0);
    assert!(!service.is_viable(project).unwrap());
}

#[test]
fn viability_is_repeatable_and_reflects_salary_changes() {
    let mut service = setup();
    let dev = developer(&mut service, "Ana", 2500.0, Seniority::Senior);
    let project = service.create_project("Chico", 5000.0).unwrap();
    service.add_employee(project, dev).unwrap();

    for _ in 0..3 {
        assert!(service.is_viable(project).unwrap());
    }

    service.set_base_salary(dev, 3000.0).unwrap();
    assert_eq!(service.cost_total(project).unwrap(), 4000.0);
    assert!(!service.is_viable(project).unwrap());
}

#[test]
fn create_project_validates_input() {
    let mut service = setup();
    assert!(matches!(
        service.create_project("Zero", 0.0).unwrap_err(),
        StaffingError::InvalidProject(_)
    ));
    assert!(matches!(
        service.create_project("  ", 100.0).unwrap_err(),
        StaffingError::InvalidProject(_)
    ));

    let id = service.create_project("Alpha", 100.0).unwrap();
    assert_eq!(id, ProjectId(1));
}

#[test]
fn summaries_resolve_names() {
    let mut service = setup();
    let boss = service
        .hire(NewEmployee::manager("Diego", 3000.0, "IT"))
        .unwrap();
    let dev = developer(&mut service, "Ana", 2500.0, Seniority::Senior);
    let project = service.create_project("Alpha", 50_000.0).unwrap();
    service.add_to_team(boss, dev).unwrap();
    service.add_employee(project, dev).unwrap();

    let summary = service.employee_summary(dev).unwrap();
    assert_eq!(summary.role_label, "Developer (Senior)");
    assert_eq!(summary.projects, vec!["Alpha".to_string()]);
    assert_eq!(summary.salary, 3500.0);
    assert_eq!(summary.project_limit, 3);

    let boss_summary = service.employee_summary(boss).unwrap();
    assert_eq!(boss_summary.team, vec!["Ana".to_string()]);
    assert!(boss_summary.projects.is_empty());

    let projects = service.project_summaries();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].members, vec!["Ana".to_string()]);
    assert!(projects[0].viability.viable);
}
