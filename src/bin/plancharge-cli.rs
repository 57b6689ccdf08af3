#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use plancharge::{
    calendar::WeeklyCalendar,
    chart::{StandardLoadChartFiller, WorkloadDataSource, ZoomLevel},
    effort::EffortDuration,
    generator::resource_load_periods,
    io,
    model::{Allocation, Interval, Resource, Workload},
    period::LoadPeriod,
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de plan de charge (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du plan de charge
    #[arg(long, global = true, default_value = "workload.json")]
    workload: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une ressource
    AddResource {
        #[arg(long)]
        name: String,
        /// Heures hebdomadaires, réparties sur les jours ouvrés
        #[arg(long, default_value_t = 40)]
        weekly_hours: u32,
    },

    /// Allouer une tâche à une ressource
    Allocate {
        #[arg(long)]
        resource: String,
        #[arg(long)]
        task: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD (fin exclusive)
        #[arg(long)]
        end: String,
        /// Effort journalier, H:MM
        #[arg(long, default_value = "8:00")]
        effort: String,
    },

    /// Importer des ressources depuis un CSV
    ImportResources {
        #[arg(long)]
        csv: String,
    },

    /// Importer des allocations depuis un CSV
    ImportAllocations {
        #[arg(long)]
        csv: String,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Calculer les périodes de charge d'une ressource
    Periods {
        #[arg(long)]
        resource: String,
        /// Export CSV des périodes (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Tracer les trois séries (surcharge, disponibilité, charge)
    Plot {
        /// YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// YYYY-MM-DD (fin exclusive)
        #[arg(long)]
        to: String,
        /// day|week|month|quarter|year (déduit de l'étendue par défaut)
        #[arg(long)]
        zoom: Option<String>,
        /// Export CSV des points (optionnel)
        #[arg(long)]
        out: Option<String>,
    },

    /// Vérifier l'invariant de non-chevauchement d'un CSV de périodes
    Check {
        #[arg(long)]
        csv: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.workload)?;
    let mut workload = match storage.load() {
        Ok(w) => w,
        Err(_) => Workload::default(),
    };

    let code = match cli.cmd {
        Commands::AddResource { name, weekly_hours } => {
            if workload.find_resource_by_name(&name).is_some() {
                bail!("resource already exists: {name}");
            }
            workload.resources.push(Resource::new(
                name,
                WeeklyCalendar::from_weekly_hours(weekly_hours),
            ));
            storage.save(&workload)?;
            0
        }
        Commands::Allocate {
            resource,
            task,
            start,
            end,
            effort,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let effort: EffortDuration = effort.parse()?;
            let resource_id = workload
                .find_resource_by_name(&resource)
                .map(|r| r.id.clone())
                .ok_or_else(|| anyhow::anyhow!("unknown resource: {}", resource))?;
            let allocation = Allocation::new(resource_id, task, start, end, effort)
                .map_err(anyhow::Error::msg)?;
            workload.allocations.push(allocation);
            storage.save(&workload)?;
            0
        }
        Commands::ImportResources { csv } => {
            let resources = io::import_resources_csv(csv)?;
            workload.resources.extend(resources);
            storage.save(&workload)?;
            0
        }
        Commands::ImportAllocations { csv } => {
            let allocations = io::import_allocations_csv(csv, &workload)?;
            workload.allocations.extend(allocations);
            storage.save(&workload)?;
            0
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_workload_json(path, &workload)?;
            }
            if let Some(path) = out_csv {
                io::export_allocations_csv(path, &workload)?;
            }
            // impression compacte
            for a in &workload.allocations {
                let resource = workload
                    .find_resource_by_id(&a.resource)
                    .map(|r| r.name.as_str())
                    .unwrap_or("-");
                println!(
                    "{} | {} → {} | {} | {} | {}/j",
                    a.id.as_str(),
                    a.start,
                    a.end,
                    resource,
                    a.task,
                    a.daily_effort
                );
            }
            0
        }
        Commands::Periods { resource, report } => {
            let resource_id = workload
                .find_resource_by_name(&resource)
                .map(|r| r.id.clone())
                .ok_or_else(|| anyhow::anyhow!("unknown resource: {}", resource))?;
            let periods = resource_load_periods(&workload, &resource_id)?;
            if let Some(path) = report {
                io::export_periods_csv(path, &periods)?;
            }
            for p in &periods {
                println!("{p}");
            }
            0
        }
        Commands::Plot {
            from,
            to,
            zoom,
            out,
        } => {
            let interval = Interval::new(parse_date(&from)?, parse_date(&to)?)
                .map_err(anyhow::Error::msg)?;
            let source = WorkloadDataSource::new(&workload);
            let filler = match zoom {
                Some(raw) => {
                    let zoom: ZoomLevel = raw.parse()?;
                    StandardLoadChartFiller::with_zoom(source, zoom)
                }
                None => StandardLoadChartFiller::new(source),
            };
            let series = filler.plot_info(&interval);
            for s in &series {
                println!("# {}", s.kind.label());
                for point in &s.points {
                    println!("{} {}", point.day, point.hours);
                }
            }
            if let Some(path) = out {
                io::export_plot_csv(path, &series)?;
            }
            0
        }
        Commands::Check { csv } => {
            let periods = io::import_periods_csv(csv)?;
            match LoadPeriod::sort(periods) {
                Ok(sorted) => {
                    println!("OK: {} period(s), no overlap", sorted.len());
                    0
                }
                Err(err) => {
                    eprintln!("{err}");
                    // Code 2 = invariant violé
                    2
                }
            }
        }
    };

    std::process::exit(code);
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date: {raw}"))
}
