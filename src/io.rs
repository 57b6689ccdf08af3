use crate::calendar::WeeklyCalendar;
use crate::chart::PlotSeries;
use crate::effort::EffortDuration;
use crate::model::{Allocation, Resource, Workload};
use crate::period::{LoadLevel, LoadPeriod};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de ressources depuis CSV: header `name[,weekly_hours]`
pub fn import_resources_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Resource>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid resource row (empty name)");
        }
        let calendar = match rec.get(1).map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let hours: u32 = raw
                    .parse()
                    .with_context(|| format!("invalid weekly_hours for resource {name}"))?;
                WeeklyCalendar::from_weekly_hours(hours)
            }
            None => WeeklyCalendar::standard(),
        };
        out.push(Resource::new(name.to_string(), calendar));
    }
    Ok(out)
}

/// Import d'allocations: header `resource,task,start,end,daily_effort`
/// (dates `YYYY-MM-DD`, fin exclusive ; la ressource est résolue par son nom).
pub fn import_allocations_csv<P: AsRef<Path>>(
    path: P,
    workload: &Workload,
) -> anyhow::Result<Vec<Allocation>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let resource_name = rec.get(0).context("missing resource")?.trim();
        let resource = workload
            .find_resource_by_name(resource_name)
            .with_context(|| format!("unknown resource: {resource_name}"))?;
        let task = rec.get(1).context("missing task")?.trim().to_string();
        let start = parse_date(rec.get(2).context("missing start")?)?;
        let end = parse_date(rec.get(3).context("missing end")?)?;
        let effort: EffortDuration = rec
            .get(4)
            .context("missing daily_effort")?
            .trim()
            .parse()
            .with_context(|| format!("invalid daily_effort for task {task}"))?;
        let allocation = Allocation::new(resource.id.clone(), task, start, end, effort)
            .map_err(anyhow::Error::msg)?;
        out.push(allocation);
    }
    Ok(out)
}

/// Import de périodes de charge: header `start,end,available,assigned`
/// (efforts `H:MM` ; le taux de charge est dérivé des deux efforts).
pub fn import_periods_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<LoadPeriod>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let start = parse_date(rec.get(0).context("missing start")?)?;
        let end = parse_date(rec.get(1).context("missing end")?)?;
        let available: EffortDuration = rec
            .get(2)
            .context("missing available")?
            .trim()
            .parse()
            .context("invalid available effort")?;
        let assigned: EffortDuration = rec
            .get(3)
            .context("missing assigned")?
            .trim()
            .parse()
            .context("invalid assigned effort")?;
        let level = LoadLevel::from_efforts(assigned, available);
        out.push(LoadPeriod::new(start, end, available, assigned, level)?);
    }
    Ok(out)
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date: {raw}"))
}

/// Export JSON du plan de charge (jolie mise en forme)
pub fn export_workload_json<P: AsRef<Path>>(path: P, workload: &Workload) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(workload)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des allocations: header `id,task,resource,start,end,daily_effort`
pub fn export_allocations_csv<P: AsRef<Path>>(path: P, workload: &Workload) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "task", "resource", "start", "end", "daily_effort"])?;
    for a in &workload.allocations {
        let resource = workload
            .find_resource_by_id(&a.resource)
            .map(|r| r.name.as_str())
            .unwrap_or("");
        w.write_record([
            a.id.as_str(),
            a.task.as_str(),
            resource,
            a.start.to_string().as_str(),
            a.end.to_string().as_str(),
            a.daily_effort.to_string().as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des périodes: header `start,end,available,assigned,level`
pub fn export_periods_csv<P: AsRef<Path>>(path: P, periods: &[LoadPeriod]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["start", "end", "available", "assigned", "level"])?;
    for p in periods {
        w.write_record([
            p.start().to_string().as_str(),
            p.end().to_string().as_str(),
            p.available_effort().to_string().as_str(),
            p.assigned_effort().to_string().as_str(),
            p.load_level().to_string().as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des séries de graphe: header `series,day,hours`
pub fn export_plot_csv<P: AsRef<Path>>(path: P, series: &[PlotSeries]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["series", "day", "hours"])?;
    for s in series {
        for point in &s.points {
            w.write_record([
                s.kind.label(),
                point.day.to_string().as_str(),
                point.hours.to_string().as_str(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
