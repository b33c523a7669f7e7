use crate::config::Config;
use crate::core::session::Session;
use crate::core::types::{MetadataKind, Weekday};
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use std::io::Write;
use strum::IntoEnumIterator;

/// Builds and prints the tables the `show` command and the flows rely on.
#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
            util: WidthUtil::default(),
        }
    }

    pub fn display_config_centered(&self, config: &Config) -> usize {
        let headers = ["ID", "KEY", "DESCRIPTION", "VALUE"];
        let rows: Vec<Vec<String>> = config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect();

        let table_w = self
            .printer
            .compute_table_width(&headers, &rows)
            .max(self.util.visible_width("CONFIG"));

        let pad = self.util.center_pad(table_w);
        let printer = self.printer.with_left_pad(pad);

        printer.print_table(
            "Config",
            &headers,
            &rows,
            Some("No config items found."),
            Some(table_w),
        );
        table_w
    }

    pub fn display_schedule(&self, session: &Session) {
        let mut stdout = std::io::stdout();
        let _ = self.render_schedule(session, &mut stdout);
    }

    pub fn display_metadata(&self, session: &Session, kind: MetadataKind) {
        let mut stdout = std::io::stdout();
        let _ = self.render_metadata(session, kind, &mut stdout);
    }

    /// One table per weekday; 1-based entry numbers match what `del` takes.
    pub fn render_schedule<W: Write + ?Sized>(
        &self,
        session: &Session,
        out: &mut W,
    ) -> std::io::Result<()> {
        let headers = ["#", "COURSE", "START", "END", "NOTIFY"];
        for day in Weekday::iter() {
            let rows: Vec<Vec<String>> = session
                .entries(day)
                .iter()
                .enumerate()
                .map(|(i, e)| {
                    vec![
                        (i + 1).to_string(),
                        e.name.clone(),
                        e.start_time.to_string(),
                        e.end_time.to_string(),
                        e.send_message.to_string(),
                    ]
                })
                .collect();

            let empty = format!("No courses scheduled for {day}.");
            self.printer
                .render_table(&day.to_string(), &headers, &rows, Some(&empty), None, out)?;
        }
        Ok(())
    }

    pub fn render_metadata<W: Write + ?Sized>(
        &self,
        session: &Session,
        kind: MetadataKind,
        out: &mut W,
    ) -> std::io::Result<()> {
        let headers = ["COURSE", kind.value_label()];
        let rows: Vec<Vec<String>> = session
            .course_names()
            .iter()
            .map(|name| {
                vec![
                    name.clone(),
                    session.metadata_for(name).unwrap_or("-").to_string(),
                ]
            })
            .collect();

        self.printer.render_table(
            "Links",
            &headers,
            &rows,
            Some("No courses added yet."),
            None,
            out,
        )
    }
}
