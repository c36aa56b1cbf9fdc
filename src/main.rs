use clap::Parser;
use roster::application::{init::init, ConfigService, EmployeeDraft, EmployeeService};
use roster::cli::{format_employee, format_employee_list, format_issues, Cli, Commands};
use roster::domain::{Employee, EmployeeId};
use roster::error::{Result, RosterError};
use roster::infrastructure::{Config, FileStore};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so command output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ROSTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init {
            path,
            storage_key,
            no_demo,
        }) => {
            let config = Config {
                storage_key,
                seed_demo_data: !no_demo,
            };
            init(&path, &config)?;
            println!("Initialized roster at {}", path.display());
            Ok(())
        }
        Some(Commands::List { json }) => {
            let service = open_service()?;
            if json {
                println!("{}", serde_json::to_string_pretty(service.list_employees())?);
            } else {
                println!("{}", format_employee_list(service.list_employees()).trim_end());
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let service = open_service()?;
            let id = parse_id(&id)?;
            let employee = service
                .find_employee(&id)
                .ok_or_else(|| RosterError::EmployeeNotFound(id.to_string()))?;
            print!("{}", format_employee(&employee));
            Ok(())
        }
        Some(Commands::Add {
            first_name,
            last_name,
            experience,
            age,
            address,
        }) => {
            let mut service = open_service()?;
            let draft = EmployeeDraft {
                id: None,
                first_name,
                last_name,
                experience,
                age,
                address,
            };

            if !service.create_employee(draft.clone()) {
                return Err(invalid(draft.into_employee(None)));
            }

            if let Some(added) = service.list_employees().last() {
                println!(
                    "Added {} (id {})",
                    added.full_name(),
                    added.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
                );
            }
            Ok(())
        }
        Some(Commands::Update { id, changes }) => {
            if changes.is_empty() {
                return Err(RosterError::Config(
                    "Nothing to update. Pass at least one field, e.g. --age 31".to_string(),
                ));
            }

            let mut service = open_service()?;
            let id = parse_id(&id)?;
            let mut employee = service
                .find_employee(&id)
                .ok_or_else(|| RosterError::EmployeeNotFound(id.to_string()))?;

            if let Some(v) = changes.first_name {
                employee.first_name = v;
            }
            if let Some(v) = changes.last_name {
                employee.last_name = v;
            }
            if let Some(v) = changes.experience {
                employee.experience = v;
            }
            if let Some(v) = changes.age {
                employee.age = v;
            }
            if let Some(v) = changes.address {
                employee.address = v;
            }

            if !service.update_employee(EmployeeDraft::from(employee.clone())) {
                return Err(invalid(employee));
            }

            println!("Updated {} (id {})", employee.full_name(), id);
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let mut service = open_service()?;
            let id = parse_id(&id)?;
            let existed = service.find_employee(&id).is_some();

            service.delete_employee(&id);

            if existed {
                println!("Deleted employee {}", id);
            } else {
                println!("No employee with id {}", id);
            }
            Ok(())
        }
        Some(Commands::Blank) => {
            println!("{}", serde_json::to_string_pretty(&Employee::blank())?);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileStore::discover()?);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("seed_demo_data = {}", config.seed_demo_data);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: roster config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, seed_demo_data");
                Ok(())
            }
        }
        None => {
            println!("roster - Employee list manager");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn open_service() -> Result<EmployeeService<FileStore>> {
    EmployeeService::open(FileStore::discover()?)
}

fn parse_id(raw: &str) -> Result<EmployeeId> {
    EmployeeId::from_str(raw).map_err(RosterError::Config)
}

fn invalid(employee: Employee) -> RosterError {
    RosterError::InvalidEmployee(format_issues(&employee.validation_errors()))
}
