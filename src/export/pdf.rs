use crate::errors::AppResult;
use crate::models::day::Day;
use crate::models::schedule::WeekSchedule;
use crate::utils::color::hex_to_rgb_f32;
use pdf_writer::{Content, Name, Pdf, Rect, Ref};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,

    pages_emitted: usize,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        // Font globale
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 16.0,

            next_id,
            font_id,

            font_size: 8.0,
            header_font_size: 9.0,
            title_font_size: 14.0,

            pages_emitted: 0,
        }
    }

    /// Genera un nuovo Ref univoco
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Crea una nuova pagina e relativo oggetto di contenuto
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Scrive lo stream della pagina corrente
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Imposta il nodo `Pages` con count e kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    /// Larghezza colonna orari e larghezza colonna dipendente
    fn grid_col_widths(&self, employees: usize) -> (f32, f32) {
        let time_w = 60.0;
        let grid_w = self.page_w - 2.0 * self.margin - time_w;
        let emp_w = if employees > 0 {
            grid_w / employees as f32
        } else {
            grid_w
        };
        (time_w, emp_w)
    }

    fn draw_page_header(&self, content: &mut Content, title: &str, day_name: &str, page: usize) {
        // Titolo
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        // Giorno corrente
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin - 2.0,
            self.header_font_size,
            day_name,
        );

        // Numero pagina
        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    fn draw_header_row(
        &self,
        content: &mut Content,
        y: f32,
        time_w: f32,
        emp_w: f32,
        names: &[&str],
    ) {
        let total = time_w + emp_w * names.len() as f32;

        content.save_state();
        content.set_fill_rgb(0.85, 0.87, 0.90);
        content.rect(self.margin, y, total, self.row_h);
        content.fill_nonzero();
        content.restore_state();

        let mut x = self.margin;
        self.draw_text(content, x + 4.0, y + 4.0, self.header_font_size, "Time");
        self.draw_cell_borders(content, x, y, time_w, self.row_h);
        x += time_w;

        for name in names {
            self.draw_text(content, x + 4.0, y + 4.0, self.header_font_size, name);
            self.draw_cell_borders(content, x, y, emp_w, self.row_h);
            x += emp_w;
        }
    }

    fn draw_grid_row(
        &self,
        content: &mut Content,
        y: f32,
        time_w: f32,
        emp_w: f32,
        label: &str,
        fills: &[Option<(f32, f32, f32)>],
    ) {
        let mut x = self.margin;
        self.draw_text(content, x + 4.0, y + 4.0, self.font_size, label);
        self.draw_cell_borders(content, x, y, time_w, self.row_h);
        x += time_w;

        for fill in fills {
            if let Some((r, g, b)) = fill {
                content.save_state();
                content.set_fill_rgb(*r, *g, *b);
                content.rect(x, y, emp_w, self.row_h);
                content.fill_nonzero();
                content.restore_state();
            }
            self.draw_cell_borders(content, x, y, emp_w, self.row_h);
            x += emp_w;
        }
    }

    /// Una griglia per giorno, multipagina quando necessario.
    pub fn write_schedule(&mut self, title: &str, schedule: &WeekSchedule) -> AppResult<()> {
        let mut palette = Vec::with_capacity(schedule.plans.len());
        for plan in &schedule.plans {
            palette.push(hex_to_rgb_f32(&plan.color)?);
        }

        let names: Vec<&str> = schedule.plans.iter().map(|p| p.name.as_str()).collect();

        for (day_index, day) in schedule.days.iter().enumerate() {
            self.write_day_grid(title, day, day_index, schedule, &names, &palette);
        }

        Ok(())
    }

    fn write_day_grid(
        &mut self,
        title: &str,
        day: &Day,
        day_index: usize,
        schedule: &WeekSchedule,
        names: &[&str],
        palette: &[(f32, f32, f32)],
    ) {
        let (time_w, emp_w) = self.grid_col_widths(names.len());
        let mut remaining: &[String] = &day.slots;

        loop {
            self.pages_emitted += 1;

            let mut content = self.new_page();
            self.draw_page_header(&mut content, title, &day.name, self.pages_emitted);

            let mut y = self.page_h - self.margin - 40.0;

            self.draw_header_row(&mut content, y, time_w, emp_w, names);
            y -= self.row_h;

            let mut consumed = 0;

            for slot in remaining {
                if y - self.row_h < self.margin {
                    break;
                }

                let fills: Vec<Option<(f32, f32, f32)>> = schedule
                    .plans
                    .iter()
                    .enumerate()
                    .map(|(i, plan)| plan.is_worked(day_index, slot).then(|| palette[i]))
                    .collect();

                self.draw_grid_row(&mut content, y, time_w, emp_w, slot, &fills);

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);

            remaining = &remaining[consumed..];
            if remaining.is_empty() || consumed == 0 {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        // Costruisci Catalog + Pages una sola volta, qui
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
