//! HTML rendering of a weekly schedule: one table per day, one column
//! per employee. A cell carries the employee color if and only if the
//! slot appears in that employee's worked sequence for the day.

use crate::models::schedule::WeekSchedule;

const UNASSIGNED: &str = "#FFFFFF";

pub fn render_week(schedule: &WeekSchedule) -> String {
    let mut body = String::new();

    for (day_index, day) in schedule.days.iter().enumerate() {
        body.push_str(&format!("    <h2>{}</h2>\n", escape(&day.name)));
        body.push_str("    <table>\n        <tr>\n            <th>Time</th>\n");

        for plan in &schedule.plans {
            body.push_str(&format!("            <th>{}</th>\n", escape(&plan.name)));
        }
        body.push_str("        </tr>\n");

        for slot in &day.slots {
            body.push_str(&format!(
                "        <tr>\n            <td>{}</td>\n",
                escape(slot)
            ));

            for plan in &schedule.plans {
                let color = if plan.is_worked(day_index, slot) {
                    plan.color.as_str()
                } else {
                    UNASSIGNED
                };
                body.push_str(&format!(
                    "            <td style=\"background-color: {}\"></td>\n",
                    color
                ));
            }

            body.push_str("        </tr>\n");
        }

        body.push_str("    </table>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <style>
        body {{ font-family: Arial, sans-serif; }}
        table {{ border-collapse: collapse; width: 100%; margin-bottom: 20px; }}
        th, td {{ border: 1px solid black; padding: 5px; text-align: center; }}
    </style>
</head>
<body>
    <h1>Weekly Shift Schedule</h1>
{}</body>
</html>
"#,
        body
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
