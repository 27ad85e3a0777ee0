use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde_json::Value;
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use crate::controller::InstanceListController;
use crate::models::{connection_label, Instance};
use crate::utils::{human_size, sort_instances};

const PLACEHOLDER: &str = "—";
const SORT_MARKER: &str = "▲";

/// Table columns as (header, sort field).
pub const COLUMNS: &[(&str, &str)] = &[
    ("Name", "name"),
    ("Host", "host"),
    ("Port", "port"),
    ("Role", "role"),
    ("Version", "version"),
    ("Used memory", "used_memory"),
    ("Max memory", "maxmemory"),
    ("Policy", "maxmemory_policy"),
    ("Connections", "connections"),
    ("Errors", "errors"),
];

const BYTE_FIELDS: &[&str] = &["used_memory", "maxmemory"];

/// Instances in display order: sorted by the active field, then filtered with
/// `hide_no_slave` unless `show_all` is set.
pub fn visible_instances(controller: &InstanceListController, show_all: bool) -> Vec<&Instance> {
    sort_instances(controller.instances(), controller.sort_field())
        .into_iter()
        .filter(|i| show_all || controller.hide_no_slave(i))
        .collect()
}

/// Byte-valued attribute as a humanized size. Negative or fractional values
/// are not byte counts and render as a placeholder.
pub fn byte_cell(value: Option<&Value>) -> String {
    value
        .and_then(|v| v.as_u64())
        .map(human_size)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn text_cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn row(instance: &Instance) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|(_, field)| match *field {
            "name" => instance.name.clone(),
            "host" => text_cell(instance.attribute("host").or_else(|| instance.attribute("vip"))),
            "connections" => instance
                .connections
                .iter()
                .map(connection_label)
                .collect::<Vec<_>>()
                .join("\n"),
            "errors" => instance.errors.join("\n"),
            f if BYTE_FIELDS.contains(&f) => byte_cell(instance.attribute(f)),
            f => text_cell(instance.attribute(f)),
        })
        .collect()
}

/// Build the instance table. `width` of `None` disables wrapping.
pub fn build_table(controller: &InstanceListController, show_all: bool, width: Option<u16>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    match width {
        Some(w) => {
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_width(w);
        }
        None => {
            table.set_content_arrangement(ContentArrangement::Disabled);
        }
    }

    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(label, field)| {
            if controller.is_sort_field(field) {
                format!("{} {}", label, SORT_MARKER)
            } else {
                label.to_string()
            }
        })
        .collect();
    table.set_header(header);

    for instance in visible_instances(controller, show_all) {
        table.add_row(row(instance));
    }
    table
}

/// Print accumulated errors followed by the instance table.
pub fn print_dashboard(controller: &InstanceListController, show_all: bool) {
    for error in controller.errors() {
        eprintln!("{}", Paint::new(error).red());
    }

    let shown = visible_instances(controller, show_all).len();
    if controller.instances().is_empty() {
        println!("{}", Paint::new("(no instances)").dim());
        return;
    }

    let width = terminal_size().map(|(Width(w), _)| w.saturating_sub(4));
    let table = build_table(controller, show_all, width);
    println!("\n{table}");

    let hidden = controller.instances().len() - shown;
    if hidden > 0 {
        println!(
            "\n{}",
            Paint::new(format!(
                "Showing {} of {} instances ({} without replication or errors hidden, use --all to show them)",
                shown,
                controller.instances().len(),
                hidden
            ))
            .dim()
        );
    } else {
        println!(
            "\n{}",
            Paint::new(format!("Showing all {} instances, sorted by {}", shown, controller.sort_field())).dim()
        );
    }
    println!();
}

/// Dump the view state as pretty JSON; instances come out exactly as received.
pub fn print_json(controller: &InstanceListController) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(controller.view_state())?);
    Ok(())
}
