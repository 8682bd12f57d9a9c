use crate::cli::parser::Commands;
use crate::codec::LabScoreCodec;
use crate::codec::field::encode_optional;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{AttendanceStatus, Student, WEEKS};
use crate::storage;
use crate::ui::messages::warning;
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { weeks } = cmd {
        let options = cfg.codec_options();
        let loaded = storage::read_file(Path::new(&cfg.roster_file), options)?;

        if loaded.students.is_empty() {
            println!("No students in {}", cfg.roster_file);
        } else {
            let labs = LabScoreCodec::new(options.total_labs, options.strictness);
            print!("{}", render_students(&loaded.students, &labs)?);
            if *weeks {
                for s in &loaded.students {
                    println!("{}: {}", s.mat_num(), week_labels(s));
                }
            }
        }

        if !loaded.is_clean() {
            warning(format!(
                "{} rows skipped; run `rostercodec check` for details",
                loaded.skipped()
            ));
        }
    }
    Ok(())
}

fn week_labels(s: &Student) -> String {
    s.attendance()
        .iter()
        .map(|(week, status)| status.label(week))
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_students(students: &[Student], labs: &LabScoreCodec) -> AppResult<String> {
    let mut table = Table::new(vec![
        Column::new("NAME", 20),
        Column::new("MAT NO", 9),
        Column::new("TUT", 3),
        Column::new("LAB", 3),
        Column::new("ATT", 5),
        Column::new("MC", 2),
        Column::new("LAB SCORES", 12),
        Column::new("TAGS", 10),
    ]);

    for s in students {
        let tags: Vec<String> = s.tags().iter().map(|t| t.to_string()).collect();
        table.add_row(vec![
            s.name().to_string(),
            s.mat_num().to_string(),
            encode_optional(s.tut_group()),
            encode_optional(s.lab_group()),
            format!(
                "{}/{}",
                s.attendance().count(AttendanceStatus::Attended),
                WEEKS
            ),
            s.attendance()
                .count(AttendanceStatus::OnMedicalCertificate)
                .to_string(),
            labs.encode(s.lab_scores())?,
            tags.join(" "),
        ]);
    }

    Ok(table.render())
}
