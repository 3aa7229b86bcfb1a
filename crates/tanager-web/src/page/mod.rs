//! Page construction.
//!
//! Loader failures never abort a page: each chart region independently shows
//! either its chart or a labelled message, and the navigation always renders.

pub mod charts;
pub mod html;
pub mod layout;

use std::fmt::Write;
use std::path::Path;

use tanager_config::TanagerConfig;
use tanager_core::entities::{DensityCurve, StatisticsRecord};
use tanager_data::{LoadError, StatisticsLoad, distribution, load_statistics, project_dir};

use crate::error::WebError;
use crate::nav::navigation_for;
use crate::router::Route;
use crate::slider::SliderSpec;
use html::{error_message, escape, note};

/// Render the full document for `route`.
///
/// # Errors
///
/// Returns `WebError::Render` only if string formatting fails.
pub fn render_page(
    config: &TanagerConfig,
    route: &Route,
    generation: Option<usize>,
) -> Result<String, WebError> {
    let entries = navigation_for(&config.data.root, None);

    let mut content = String::new();
    let title = match route {
        Route::Default => {
            landing(&mut content, entries.len())?;
            "Tanager".to_string()
        }
        Route::Project(name) => {
            project_view(&mut content, config, name, generation)?;
            format!("Tanager - {name}")
        }
    };

    let mut out = String::with_capacity(content.len() + 4096);
    layout::shell(&mut out, &title, &entries, &content)?;
    Ok(out)
}

/// Sidebar links only, for the filter/refresh endpoint.
///
/// # Errors
///
/// Returns `WebError::Render` only if string formatting fails.
pub fn render_navigation(config: &TanagerConfig, filter: Option<&str>) -> Result<String, WebError> {
    let entries = navigation_for(&config.data.root, filter);
    let mut out = String::new();
    layout::nav_links(&mut out, &entries)?;
    Ok(out)
}

fn landing(out: &mut String, project_count: usize) -> std::fmt::Result {
    writeln!(out, "<h1>Tanager</h1>")?;
    writeln!(out, "<section class=\"panel landing\">")?;
    writeln!(
        out,
        "<p>Visualize evolutionary computation runs. Select a project from the sidebar.</p>"
    )?;
    writeln!(
        out,
        "<p class=\"summary\">{project_count} project(s) available.</p>"
    )?;
    writeln!(out, "</section>")
}

fn project_view(
    out: &mut String,
    config: &TanagerConfig,
    name: &str,
    generation: Option<usize>,
) -> std::fmt::Result {
    writeln!(out, "<h1>Project {}</h1>", escape(name))?;

    let (statistics, dir) = match project_dir(&config.data.root, name) {
        Ok(dir) => (load_statistics(&dir, &config.data), Some(dir)),
        Err(error) => (Err(error), None),
    };
    if let Err(error) = &statistics {
        tracing::warn!(project = name, %error, "statistics unavailable");
    }

    let generation_count = statistics
        .as_ref()
        .map_or(0, |load| load.series.generation_count);
    let slider = SliderSpec::new(generation_count, config.slider.mark_budget, generation);

    writeln!(out, "<main class=\"grid\">")?;

    writeln!(out, "<section class=\"panel\">")?;
    distribution_panel(out, config, dir.as_deref(), name, slider.generation())?;
    slider_control(out, &slider)?;
    writeln!(out, "</section>")?;

    writeln!(out, "<section class=\"panel\">")?;
    statistics_panel(out, &statistics)?;
    writeln!(out, "</section>")?;

    writeln!(out, "</main>")?;

    if config.server.debug {
        sources(out, config, dir.as_deref(), &statistics)?;
    }
    Ok(())
}

fn statistics_panel(out: &mut String, statistics: &Result<StatisticsLoad, LoadError>) -> std::fmt::Result {
    let load = match statistics {
        Ok(load) => load,
        Err(error) => return error_message(out, error),
    };

    if let Some(warning) = &load.warning {
        note(out, "warning", &warning.to_string())?;
    }
    if load.series.is_empty() {
        return note(out, "empty", "The statistics file contains no generations yet.");
    }

    charts::fitness_vs_generation(out, &load.series)?;
    if let Some(last) = &load.series.last {
        summary(out, last)?;
    }
    Ok(())
}

fn summary(out: &mut String, last: &StatisticsRecord) -> std::fmt::Result {
    write!(
        out,
        "<p class=\"summary\">Generation {}: average {:.4} ± {:.4}",
        last.generation, last.average, last.std_dev
    )?;
    if let Some(best) = last.best {
        write!(out, ", best {best:.4}")?;
    }
    if let Some(median) = last.median {
        write!(out, ", median {median:.4}")?;
    }
    if let Some(worst) = last.worst {
        write!(out, ", worst {worst:.4}")?;
    }
    if let Some(size) = last.pop_size {
        write!(out, ", population {size}")?;
    }
    writeln!(out, "</p>")
}

fn distribution_panel(
    out: &mut String,
    config: &TanagerConfig,
    dir: Option<&Path>,
    name: &str,
    generation: usize,
) -> std::fmt::Result {
    let Some(dir) = dir else {
        return error_message(
            out,
            &LoadError::InvalidProjectName {
                name: name.to_string(),
            },
        );
    };

    match distribution::load_distribution(dir, generation, &config.data) {
        Ok(sample) => match DensityCurve::normal(&sample) {
            Some(curve) => charts::generation_distribution(out, &curve, generation),
            None => note(
                out,
                "empty",
                &format!(
                    "Generation {generation} has too little spread to estimate a distribution."
                ),
            ),
        },
        Err(error) => {
            tracing::warn!(project = name, %error, "distribution unavailable");
            error_message(out, &error)
        }
    }
}

fn slider_control(out: &mut String, slider: &SliderSpec) -> std::fmt::Result {
    writeln!(out, "<form method=\"get\" class=\"slider\">")?;
    writeln!(out, "<label for=\"generation\">Select Generation</label>")?;
    writeln!(
        out,
        "<input type=\"range\" id=\"generation\" name=\"generation\" min=\"0\" max=\"{}\" step=\"1\" value=\"{}\" list=\"generation-marks\" data-mark-step=\"{}\" onchange=\"this.form.submit()\"/>",
        slider.max, slider.value, slider.step
    )?;
    writeln!(out, "<datalist id=\"generation-marks\">")?;
    for mark in slider.marks() {
        writeln!(out, "<option value=\"{mark}\" label=\"{mark}\"></option>")?;
    }
    writeln!(out, "</datalist>")?;
    writeln!(out, "</form>")
}

fn sources(
    out: &mut String,
    config: &TanagerConfig,
    dir: Option<&Path>,
    statistics: &Result<StatisticsLoad, LoadError>,
) -> std::fmt::Result {
    let Some(dir) = dir else {
        return Ok(());
    };
    let stats = statistics
        .as_ref()
        .map_or_else(|_| "-".to_string(), |load| load.path.display().to_string());
    let population = distribution::locate_distribution_file(dir, &config.data)
        .map_or_else(|_| "-".to_string(), |path| path.display().to_string());
    note(
        out,
        "sources",
        &format!(
            "directory: {} | statistics: {stats} | population: {population}",
            dir.display()
        ),
    )
}
