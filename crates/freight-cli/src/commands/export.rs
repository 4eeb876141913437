//! Consolidated export of every collection.

use freight_core::export::{export_file_name, ExportDocument};

use crate::app::App;
use crate::prompt::{confirm, text_optional};
use crate::ui::{header, print_error, print_success};

const PERMISSION_HINT: &str = "Verifique se você tem permissão para escrever na pasta de exportação.";

pub fn run(app: &mut App) -> anyhow::Result<()> {
    println!("{}", header(&app.ui, "Exportar Dados"));

    if !confirm(
        app.prompter.as_mut(),
        "Tem certeza que deseja exportar todos os dados? (s/n)",
    )? {
        println!("Exportação cancelada.");
        return Ok(());
    }

    let prompt = format!(
        "Nome do arquivo (sem extensão) [{}]",
        app.config.export_default_name
    );
    let answer = text_optional(app.prompter.as_mut(), &prompt)?.unwrap_or_default();
    let file_name = export_file_name(&answer, &app.config.export_default_name);

    let document = ExportDocument::snapshot(&app.store);
    match document.write_to(&app.config.export_dir, &file_name) {
        Ok(path) => {
            println!();
            print_success(
                &app.ui,
                &format!("Dados exportados com sucesso para: {}", path.display()),
            );
        }
        Err(err) => {
            println!();
            print_error(
                &app.ui,
                &format!("Erro ao exportar dados: {}", err),
                Some(PERMISSION_HINT),
            );
        }
    }
    Ok(())
}
