//! Interactive HTML calendar tables.
//!
//! Self-contained documents: sticky first column and header row,
//! today/weekend/holiday column marking, hover tooltips fed by the core
//! tooltip builder, go-to-today scrolling and client-side column sort.
//! The grid itself never emits markup; everything visual lives here.

use crate::core::calendar::CalendarWindow;
use crate::core::grid::{ScheduleGrid, SummaryGrid, family};
use crate::core::tooltip::{Dimension, build_tooltip};
use crate::models::record::RunRecord;
use crate::models::shift::Shift;
use crate::utils::html::escape;
use chrono::{Days, NaiveDate};

/// Days before/after today shown by the initially filtered project view.
const FILTER_DAYS_BACK: u64 = 10;
const FILTER_DAYS_AHEAD: u64 = 30;

const SHIFT_GRID_CSS: &str = r#"
      .table-wrapper {
        overflow-x: auto;
        max-height: 700px;
        border: 1px solid #ddd;
        position: relative;
        width: 100%;
      }
      table {
        border-collapse: collapse;
        width: auto;
        min-width: 5000px;
      }
      table tr:first-child th {
        position: sticky;
        top: 0;
        background: #f9f9f9;
        z-index: 5;
      }
      th, td {
        width: 100px;
        max-width: 100px;
        min-width: 100px;
        border:1px solid #ddd;
        padding:2px;
        font-size: 10px;
        font-family: "Segoe UI", Arial, sans-serif;
        vertical-align: top;
      }
      th.weekend-col, td.weekend-col, th.holiday-col, td.holiday-col {
        width: 20px !important;
        max-width: 20px !important;
        min-width: 20px !important;
      }
      td.day-separator {
        border-right: 8px solid #333;
      }
      .cell-content {
        overflow: hidden;
        white-space: normal;
        word-break: break-word;
        overflow-wrap: break-word;
        line-height: 1.2em;
      }
      th:first-child, td:first-child {
        position: sticky;
        left: 0;
        background: #f9f9f9;
        z-index: 2;
        font-size: 12px;
        width: 100px;
        min-width: 100px;
        max-width: 100px;
        white-space: normal;
        overflow: hidden;
        height: auto;
        font-weight: bold;
      }
      th:first-child { z-index: 3; }
      .today-col { background-color: #fff3cd !important; }
      .weekend-col { background-color: #e0e0e0 !important; }
      .holiday-col { background-color: #ffcccc !important; }

      td.has-tip { position: relative; }
      td.has-tip .tip-box {
        display: none;
        position: absolute;
        bottom: 50%;
        left: 50%;
        background: #333;
        color: #fff;
        padding: 8px 10px;
        border-radius: 6px;
        min-width: 50px;
        max-width: 800px;
        font-size: 12px;
        z-index: 50;
        box-shadow: 0 4px 16px rgba(0,0,0,0.25);
        white-space: nowrap;
      }
      td.has-tip:hover .tip-box {
          display: block;
      }

      .tt-proj { font-weight: 700; margin: 4px 0 2px; }
      .tt-row  { margin: 0 0 2px; }
      .btn-today {
        background: #007bff;
        color: white;
        padding: 6px 12px;
        border: none;
        margin-bottom: 8px;
        cursor: pointer;
        border-radius: 4px;
      }
"#;

const SUMMARY_CSS: &str = r#"
      .table-wrapper {
        overflow-x: auto;
        max-height: 1000px;
        border: 1px solid #ddd;
        position: relative;
        width: 100%;
      }
      table {
        border-collapse: collapse;
        width: auto;
        min-width: 5000px;
      }
      table tr:first-child th {
        position: sticky;
        top: 0;
        background: #f9f9f9;
        z-index: 5;
      }
      th, td {
        width: 20px;
        max-width: 20px;
        min-width: 20px;
        border:1px solid #ddd;
        padding:0;
        font-size: 12px;
        font-family: "Segoe UI", Arial, sans-serif;
      }
      th:not(:first-child) {
        font-size: 9px;
        writing-mode: vertical-rl;
        white-space: nowrap;
        height: 60px;
        padding: 0 2px;
        transform: rotate(-40deg);
        transform-origin: bottom left;
        text-align: left;
      }
      th:first-child, td:first-child {
        position: sticky;
        left: 0;
        background: #f9f9f9;
        z-index: 2;
        font-size: 10px;
        width: 250px;
        min-width: 250px;
        max-width: 250px;
        font-weight: bold;
      }
      th:first-child { z-index: 3; }
      .today-col { background-color: #fff3cd !important; }
      .weekend-col { background-color: #e0e0e0 !important; }
      .holiday-col { background-color: #ffcccc !important; }
      .btn-today {
        background: #007bff;
        color: white;
        padding: 6px 12px;
        border: none;
        margin-bottom: 8px;
        cursor: pointer;
        border-radius: 4px;
      }
"#;

/// Scroll/sort scripting shared by the shift grids. __TABLE_ID__ is
/// substituted at render time.
const GRID_JS: &str = r##"
    function goToToday() {
      document.querySelectorAll(".table-wrapper").forEach(wrapper => {
        const todayCell = wrapper.querySelector(".today-col");
        if (todayCell) {
          const colLeft = todayCell.offsetLeft;
          const colWidth = todayCell.offsetWidth;
          const wrapperWidth = wrapper.offsetWidth;
          wrapper.scrollLeft = colLeft - (wrapperWidth / 2) + (colWidth / 2);
        }
      });
    }

    function sortColumn(colIndex) {
      var wrapper = document.getElementById("__TABLE_ID__");
      var table = wrapper.querySelector("table");
      var rows = Array.from(table.rows).slice(1).filter(r => !r.dataset.separator);
      var asc = table.getAttribute("data-sort-col") != colIndex ||
                table.getAttribute("data-sort-order") == "desc";

      rows.sort((a, b) => {
        if (!a.cells[colIndex] || !b.cells[colIndex]) return 0;

        let A = a.cells[colIndex].innerText.trim().toLowerCase();
        let B = b.cells[colIndex].innerText.trim().toLowerCase();

        // empty cells go last
        if (A === "" && B !== "") return 1;
        if (A !== "" && B === "") return -1;
        if (A === "" && B === "") return 0;

        return asc ? A.localeCompare(B) : B.localeCompare(A);
      });

      rows.forEach(row => table.appendChild(row));
      table.setAttribute("data-sort-col", colIndex);
      table.setAttribute("data-sort-order", asc ? "asc" : "desc");
    }

    function attachSortHandlers() {
      document.querySelectorAll("#__TABLE_ID__ table tr:first-child th").forEach((th, index) => {
        if (index > 0) {
          th.style.cursor = "pointer";
          th.onclick = () => sortColumn(index);
        }
      });
    }

    window.onload = function() {
      setTimeout(() => {
        goToToday();
        const table = document.getElementById("__TABLE_ID__").querySelector("table");
        const todayCell = table.querySelector(".today-col");
        if (todayCell) {
          sortColumn(todayCell.cellIndex);
        }
      }, 200);
    };

    document.addEventListener("keydown", function(e) {
      const wrapper = document.getElementById("__TABLE_ID__");
      if (!wrapper) return;
      const step = 80;
      if (e.key === "ArrowRight") {
        wrapper.scrollLeft += step;
      } else if (e.key === "ArrowLeft") {
        wrapper.scrollLeft -= step;
      }
    });

    attachSortHandlers();
"##;

const SUMMARY_JS: &str = r#"
    function goToToday() {
      var tableWrapper = document.getElementById("__TABLE_ID__");
      var todayCol = tableWrapper.querySelector(".today-col");
      if (todayCol) {
        tableWrapper.scrollLeft = todayCol.offsetLeft - tableWrapper.offsetWidth/2 + todayCol.offsetWidth/2;
      }
    }
"#;

/// Track and engineer calendars: one table over the full window.
pub fn render_shift_grid(
    grid: &ScheduleGrid,
    index_name: &str,
    table_id: &str,
    records: &[RunRecord],
    dim: Dimension,
    window: &CalendarWindow,
) -> String {
    let days = window.days();
    let table = shift_table(grid, index_name, records, dim, window, &days, false);

    document(
        index_name,
        SHIFT_GRID_CSS,
        &format!(
            "<button class=\"btn-today\" onclick=\"goToToday()\">Go to today</button>\n\
             <div class=\"table-wrapper\" id=\"{table_id}\" tabindex=\"0\">\n{table}\n</div>"
        ),
        &GRID_JS.replace("__TABLE_ID__", table_id),
    )
}

/// Project calendar: initially filtered to a band around today, with a
/// toggle that swaps in the full window. Family separator rows split
/// projects that share an id prefix.
pub fn render_project_grid(
    grid: &ScheduleGrid,
    index_name: &str,
    table_id: &str,
    records: &[RunRecord],
    window: &CalendarWindow,
) -> String {
    let all_days = window.days();
    let band_start = window.today - Days::new(FILTER_DAYS_BACK);
    let band_end = window.today + Days::new(FILTER_DAYS_AHEAD);
    let filtered: Vec<NaiveDate> = all_days
        .iter()
        .copied()
        .filter(|d| *d >= band_start && *d <= band_end)
        .collect();

    let visible = shift_table(
        grid,
        index_name,
        records,
        Dimension::Project,
        window,
        &filtered,
        true,
    );
    let full = shift_table(
        grid,
        index_name,
        records,
        Dimension::Project,
        window,
        &all_days,
        true,
    );

    let body = format!(
        "<button class=\"btn-today\" onclick=\"goToToday()\">Go to today</button>\n\
         <button class=\"btn-today\" onclick=\"showAll()\">Show all</button>\n\
         <div class=\"table-wrapper\" id=\"{table_id}\" tabindex=\"0\">\n{visible}\n</div>"
    );

    // the full table rides inside a JS template literal
    let full = full
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${");
    let script = format!(
        "const fullTable = `{full}`;\n\
         function showAll() {{\n\
           document.getElementById(\"__TABLE_ID__\").innerHTML = fullTable;\n\
           attachSortHandlers();\n\
         }}\n{}",
        GRID_JS
    )
    .replace("__TABLE_ID__", table_id);

    document(index_name, SHIFT_GRID_CSS, &body, &script)
}

/// Project summary: one color-only cell per (project, day), narrow
/// columns, rotated date headers.
pub fn render_summary_grid(
    grid: &SummaryGrid,
    index_name: &str,
    table_id: &str,
    window: &CalendarWindow,
) -> String {
    let mut table = String::from("<table>\n  <tr>\n");
    table.push_str(&format!("    <th>{}</th>", escape(index_name)));
    for day in &grid.columns {
        let classes = day_classes(window, *day, None);
        table.push_str(&format!(
            "<th class=\"{}\">{}</th>",
            classes,
            day.format("%d/%m/%y")
        ));
    }
    table.push_str("</tr>\n");

    let total_cols = grid.columns.len() + 1;
    let mut last_family: Option<String> = None;
    for row in &grid.rows {
        let prefix = family(row);
        if last_family.as_deref().is_some_and(|f| f != prefix) {
            table.push_str(&format!(
                "<tr style=\"height:5px; background:#aaa\" data-separator=\"1\"><td colspan=\"{total_cols}\"></td></tr>\n"
            ));
        }
        last_family = Some(prefix);

        table.push_str(&format!("<tr><td>{}</td>", escape(row)));
        for day in &grid.columns {
            let classes = day_classes(window, *day, None);
            let style = match grid.color(row, *day) {
                Some(color) => format!(" style=\"background-color:{color}\""),
                None => String::new(),
            };
            table.push_str(&format!("<td class=\"{classes}\"{style}></td>"));
        }
        table.push_str("</tr>\n");
    }
    table.push_str("</table>");

    document(
        index_name,
        SUMMARY_CSS,
        &format!(
            "<div class=\"button-container\">\n\
             <button class=\"btn-today\" onclick=\"goToToday()\">Go to today</button>\n\
             </div>\n\
             <div class=\"table-wrapper\" id=\"{table_id}\" tabindex=\"0\">\n{table}\n</div>"
        ),
        &SUMMARY_JS.replace("__TABLE_ID__", table_id),
    )
}

/// One `<table>` element for a shift-level grid, restricted to `days`.
fn shift_table(
    grid: &ScheduleGrid,
    index_name: &str,
    records: &[RunRecord],
    dim: Dimension,
    window: &CalendarWindow,
    days: &[NaiveDate],
    family_separators: bool,
) -> String {
    let mut out = String::from("<table>\n  <tr>\n");
    out.push_str(&format!("    <th>{}</th>", escape(index_name)));
    for day in days {
        for shift in Shift::ALL {
            let classes = day_classes(window, *day, Some(shift));
            out.push_str(&format!(
                "<th class=\"{}\">{}<br>{}</th>",
                classes,
                day.format("%d/%m/%y"),
                shift.code()
            ));
        }
    }
    out.push_str("</tr>\n");

    let total_cols = days.len() * Shift::ALL.len() + 1;
    let mut last_family: Option<String> = None;
    for row in &grid.rows {
        if family_separators {
            let prefix = row.as_deref().map(family).unwrap_or_default();
            if last_family.as_deref().is_some_and(|f| f != prefix) {
                out.push_str(&format!(
                    "<tr style=\"height:5px; background:#aaa\" data-separator=\"1\"><td colspan=\"{total_cols}\"></td></tr>\n"
                ));
            }
            last_family = Some(prefix);
        }

        let label = row.as_deref().unwrap_or("");
        out.push_str(&format!("<tr><td>{}</td>", escape(label)));
        for day in days {
            // one tooltip per (row, day); shared by the three shifts
            let tip = match row.as_deref() {
                Some(key) => build_tooltip(records, dim, key, *day),
                None => String::new(),
            };
            for shift in Shift::ALL {
                let classes = day_classes(window, *day, Some(shift));
                let cell = grid.cell(row, *day, shift);
                out.push_str(&format!(
                    "<td class=\"{classes} has-tip\"><div class=\"tip-box\">{tip}</div>{cell}</td>"
                ));
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>");

    out
}

/// Column classes for one day: today/weekend/holiday marking, plus the
/// day separator after the last shift of each day in shift grids.
fn day_classes(window: &CalendarWindow, day: NaiveDate, shift: Option<Shift>) -> String {
    let mut classes = Vec::new();
    if day == window.today {
        classes.push("today-col");
    }
    if window.is_weekend(day) {
        classes.push("weekend-col");
    }
    if window.is_holiday(day) {
        classes.push("holiday-col");
    }
    if shift == Some(Shift::Night) {
        classes.push("day-separator");
    }
    classes.join(" ")
}

fn document(title: &str, css: &str, body: &str, script: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>{}</style>\n</head>\n<body>\n{}\n<script>\n{}\n</script>\n</body>\n</html>\n",
        escape(title),
        css,
        body,
        script
    )
}
