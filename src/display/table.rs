use crate::api::models::UserProfile;
use crate::error::AppError;
use crate::utils::text::truncate_text_unicode;
use comfy_table::{Attribute, Cell, Color, Table, presets};
use serde_json::Value;

const TEXT_CELL_WIDTH: usize = 40;

/// Formatter for the list and detail views of the CLI.
pub struct TableDisplay {
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn new_table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        // No forced width: comfy-table would wrap long name cells to fit
        // it. Long text columns are truncated per cell instead.
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

        if self.use_colors {
            let cells: Vec<Cell> = headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
                .collect();
            table.set_header(cells);
        } else {
            let cells: Vec<Cell> = headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect();
            table.set_header(cells);
        }
        table
    }

    fn id_cell(&self, record: &Value) -> Cell {
        let id = self.format_cell_value(&record["id"]);
        if self.use_colors {
            Cell::new(id).fg(Color::Cyan)
        } else {
            Cell::new(id)
        }
    }

    fn text_cell(&self, record: &Value, key: &str) -> Cell {
        let text = self.format_cell_value(&record[key]);
        Cell::new(truncate_text_unicode(&text, TEXT_CELL_WIDTH))
    }

    /// Render the booking history. Records mix restaurant, hotel and
    /// property bookings, so the schedule column is derived per record.
    pub fn render_bookings(&self, data: &Value) -> Result<String, AppError> {
        let records = match data.as_array() {
            Some(records) if !records.is_empty() => records,
            _ => return Ok("No bookings found.".to_string()),
        };

        let mut table = self.new_table(&["ID", "Type", "Service", "Schedule", "Guests", "Status", "Amount"]);
        for record in records {
            table.add_row(vec![
                self.id_cell(record),
                Cell::new(self.format_cell_value(&record["serviceType"])),
                self.text_cell(record, "serviceName"),
                Cell::new(booking_schedule(record)),
                Cell::new(self.format_cell_value(&record["guests"])),
                self.status_cell(record),
                Cell::new(self.format_cell_value(&record["totalAmount"])),
            ]);
        }
        Ok(table.to_string())
    }

    pub fn render_hotels(&self, data: &Value) -> Result<String, AppError> {
        let records = match data.as_array() {
            Some(records) if !records.is_empty() => records,
            _ => return Ok("No rooms found.".to_string()),
        };

        let mut table = self.new_table(&["ID", "Name", "Type", "Rating", "Per Night", "Address"]);
        for record in records {
            table.add_row(vec![
                self.id_cell(record),
                self.text_cell(record, "name"),
                Cell::new(self.format_cell_value(&record["type"])),
                Cell::new(self.format_cell_value(&record["rating"])),
                Cell::new(self.format_cell_value(&record["pricePerNight"])),
                self.text_cell(record, "address"),
            ]);
        }
        Ok(table.to_string())
    }

    pub fn render_properties(&self, data: &Value) -> Result<String, AppError> {
        let records = match data.as_array() {
            Some(records) if !records.is_empty() => records,
            _ => return Ok("No properties found.".to_string()),
        };

        let mut table = self.new_table(&["ID", "Title", "Type", "Price", "Location", "Status"]);
        for record in records {
            table.add_row(vec![
                self.id_cell(record),
                self.text_cell(record, "title"),
                Cell::new(self.format_cell_value(&record["type"])),
                Cell::new(self.format_cell_value(&record["price"])),
                self.text_cell(record, "location"),
                self.status_cell(record),
            ]);
        }
        Ok(table.to_string())
    }

    /// Render a table-availability payload: one row per table number,
    /// marked available or booked.
    pub fn render_table_availability(&self, data: &Value) -> Result<String, AppError> {
        let mut table = self.new_table(&["Table", "Status"]);
        for number in data["availableTables"].as_array().into_iter().flatten() {
            let cell = if self.use_colors {
                Cell::new("available").fg(Color::Green)
            } else {
                Cell::new("available")
            };
            table.add_row(vec![Cell::new(self.format_cell_value(number)), cell]);
        }
        for number in data["bookedTables"].as_array().into_iter().flatten() {
            let cell = if self.use_colors {
                Cell::new("booked").fg(Color::DarkGrey)
            } else {
                Cell::new("booked")
            };
            table.add_row(vec![Cell::new(self.format_cell_value(number)), cell]);
        }

        let mut output = format!(
            "Availability for {} at {}\n",
            self.format_cell_value(&data["date"]),
            self.format_cell_value(&data["time"])
        );
        output.push_str(&table.to_string());
        Ok(output)
    }

    pub fn render_user(&self, user: &UserProfile) -> Result<String, AppError> {
        let mut table = self.new_table(&["Field", "Value"]);
        let rows = [
            ("ID", user.id.to_string()),
            ("Name", user.full_name.clone()),
            ("Email", user.email.clone()),
            ("Phone", user.phone.clone()),
            ("Roles", user.roles.join(", ")),
        ];
        for (name, value) in rows {
            let name_cell = if self.use_colors {
                Cell::new(name).fg(Color::Yellow)
            } else {
                Cell::new(name)
            };
            table.add_row(vec![name_cell, Cell::new(value)]);
        }
        Ok(table.to_string())
    }

    fn status_cell(&self, record: &Value) -> Cell {
        let status = self.format_cell_value(&record["status"]);
        if !self.use_colors {
            return Cell::new(status);
        }
        let color = match status.as_str() {
            "confirmed" | "For Sale" => Color::Green,
            "pending" | "scheduled" => Color::Yellow,
            "cancelled" => Color::Red,
            _ => Color::White,
        };
        Cell::new(status).fg(color)
    }

    pub fn format_cell_value(&self, value: &Value) -> String {
        match value {
            Value::Null => "-".to_string(),
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(arr) => {
                if arr.is_empty() {
                    "[]".to_string()
                } else if arr.iter().all(|v| v.is_string()) {
                    arr.iter()
                        .filter_map(|v| v.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                } else {
                    format!("[{} items]", arr.len())
                }
            }
            Value::Object(obj) => {
                if obj.is_empty() {
                    "{}".to_string()
                } else {
                    format!("{{{} fields}}", obj.len())
                }
            }
        }
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedule summary for a mixed booking record: restaurant bookings
/// carry date/time, hotel bookings checkIn/checkOut, property visits
/// visitDate/visitTime.
fn booking_schedule(record: &Value) -> String {
    if let (Some(date), Some(time)) = (record["date"].as_str(), record["time"].as_str()) {
        return format!("{} {}", date, time);
    }
    if let (Some(check_in), Some(check_out)) =
        (record["checkIn"].as_str(), record["checkOut"].as_str())
    {
        return format!("{} to {}", check_in, check_out);
    }
    if let Some(visit) = record["visitDate"].as_str() {
        return match record["visitTime"].as_str() {
            Some(time) => format!("{} {}", visit, time),
            None => visit.to_string(),
        };
    }
    "-".to_string()
}
