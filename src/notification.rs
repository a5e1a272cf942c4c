use crate::grid::Rota;

/// Message de confirmation affiché en fin de run réussi.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub rota_id: String,
    pub content: String,
}

/// Permet de customiser le rendu du message (console, mail...).
pub trait ConfirmationRenderer {
    fn render(&self, rota: &Rota) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextConfirmation;

impl ConfirmationRenderer for TextConfirmation {
    fn render(&self, rota: &Rota) -> String {
        format!(
            "Rota for the next 4 weeks generated successfully, with bank holidays marked!\n{start} → {end}, {employees} employee(s), {holidays} bank holiday(s), manager rule: {rule}\n",
            start = rota.window.start(),
            end = rota.window.end(),
            employees = rota.grid.employees().len(),
            holidays = rota.holidays_in_window.len(),
            rule = rota.manager_rule,
        )
    }
}

pub fn prepare_confirmation(rota: &Rota, renderer: &dyn ConfirmationRenderer) -> Confirmation {
    Confirmation {
        rota_id: rota.id.as_str().to_string(),
        content: renderer.render(rota),
    }
}
