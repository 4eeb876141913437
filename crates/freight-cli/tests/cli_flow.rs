use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_freight"))
}

fn run_freight(home: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(bin())
        .args(args)
        .env("HOME", home)
        .env_remove("USERPROFILE")
        .env_remove("COLUMNS")
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn freight");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait freight")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn data_dir(home: &Path) -> PathBuf {
    home.join("dados_transporte_rural")
}

const SEED: &str = concat!(
    // property
    "1\n1\nFazenda Azul\nRio Verde (GO)\n120\n100\n0\n",
    // vehicle
    "2\n1\nCaminhão\n1000\n2\n0\n",
    // product
    "3\n1\nMilho\n20\n0\n",
);

#[test]
fn test_startup_creates_layout_and_exits_on_zero() {
    let home = tempfile::tempdir().unwrap();
    let output = run_freight(home.path(), &[], "0\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Arquivos de dados serão armazenados em:"));
    assert!(out.contains("Simulador de Logística de Transporte Rural iniciado com sucesso!"));
    assert!(out.contains("--- Simulador de Logística de Transporte Rural ---"));
    for file in [
        "propriedades.json",
        "veiculos.json",
        "produtos.json",
        "calculos.json",
    ] {
        let contents = std::fs::read_to_string(data_dir(home.path()).join(file)).unwrap();
        assert_eq!(contents, "[]");
    }
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let home = tempfile::tempdir().unwrap();
    let output = run_freight(home.path(), &[], "2\n1\nVan\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!stdout(&output).contains("Erro inesperado"));
    let vehicles = std::fs::read_to_string(data_dir(home.path()).join("veiculos.json")).unwrap();
    assert_eq!(vehicles, "[]");
}

#[test]
fn test_invalid_main_choice() {
    let home = tempfile::tempdir().unwrap();
    let output = run_freight(home.path(), &[], "9\n0\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Opção inválida."));
}

#[test]
fn test_full_session() {
    let home = tempfile::tempdir().unwrap();
    let script = format!(
        "{}{}{}{}{}{}",
        SEED,
        // calculate: property 1, vehicle 1, product 1, 2500 kg
        "4\n1\n1\n1\n2500\n",
        // list calculations
        "5\n",
        // try to remove vehicle 1
        "2\n3\n1\n0\n",
        // export with the default name
        "6\ns\n\n",
        "0\n",
    );
    let output = run_freight(home.path(), &[], &script);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Propriedade adicionada com sucesso!"));
    assert!(out.contains("Veículo adicionado com sucesso!"));
    assert!(out.contains("Produto adicionado com sucesso!"));
    assert!(out.contains("Número de viagens: 3"));
    assert!(out.contains("Custo total estimado: R$ 3081.82"));
    assert!(out.contains("Cálculo salvo com sucesso!"));
    assert!(out.contains("ID 1: Milho de Fazenda Azul com Caminhão"));
    assert!(out.contains("Não é possível remover. Existem cálculos associados a este veículo."));
    assert!(out.contains("Dados exportados com sucesso para:"));

    let export_path = home
        .path()
        .join("Downloads")
        .join("dados_transporte_rural_export.json");
    let export: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(export_path).unwrap()).unwrap();
    assert_eq!(export["propriedades"][0]["localizacao"], "Rio Verde");
    assert_eq!(export["veiculos"].as_array().unwrap().len(), 1);
    assert_eq!(export["calculos_realizados"][0]["viagens"], 3);
    assert_eq!(export["calculos_realizados"][0]["distancia_total"], 600.0);
}

#[test]
fn test_calculation_with_unknown_vehicle_is_not_saved() {
    let home = tempfile::tempdir().unwrap();
    let script = format!("{}{}", SEED, "4\n1\n7\n0\n");
    let output = run_freight(home.path(), &[], &script);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Veículo não encontrado."));
    let calcs = std::fs::read_to_string(data_dir(home.path()).join("calculos.json")).unwrap();
    assert_eq!(calcs, "[]");
}

#[test]
fn test_edit_keeps_blank_fields() {
    let home = tempfile::tempdir().unwrap();
    let script = format!("{}{}", SEED, "3\n2\n1\n\n25\n4\n0\n0\n");
    let output = run_freight(home.path(), &[], &script);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Produto atualizado com sucesso!"));
    assert!(out.contains("  Peso por cesto/unidade: 25.0 kg"));

    let products: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(data_dir(home.path()).join("produtos.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(products[0]["nome"], "Milho");
    assert_eq!(products[0]["peso_cesto"], 25.0);
}

#[test]
fn test_malformed_document_warns_and_lists_empty() {
    let home = tempfile::tempdir().unwrap();
    let dir = data_dir(home.path());
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("propriedades.json"), "{\"nome\": 1}").unwrap();

    let output = run_freight(home.path(), &[], "1\n4\n0\n0\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Nenhuma propriedade encontrada."));
    let err = stderr(&output);
    assert!(err.contains("Aviso:"));
    assert!(err.contains("Inicializando propriedades.json como lista vazia."));
}

#[test]
fn test_config_file_moves_data_dir() {
    let home = tempfile::tempdir().unwrap();
    let custom = home.path().join("fretes");
    let config_path = home.path().join("freight.toml");
    std::fs::write(
        &config_path,
        format!("[storage]\ndata_dir = \"{}\"\n", custom.display()),
    )
    .unwrap();

    let output = run_freight(
        home.path(),
        &["--config", config_path.to_str().unwrap()],
        "0\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(custom.join("calculos.json").exists());
    assert!(!data_dir(home.path()).exists());
}

#[test]
fn test_missing_config_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nao_existe.toml");

    let output = run_freight(home.path(), &["--config", missing.to_str().unwrap()], "0\n");

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Erro inesperado"));
    assert!(out.contains("Falha ao ler configuração"));
}

#[test]
fn test_add_after_unreadable_document_backs_it_up() {
    let home = tempfile::tempdir().unwrap();
    let dir = data_dir(home.path());
    std::fs::create_dir_all(&dir).unwrap();
    let original = concat!(
        "[{\"id\": 1, \"nome\": \"Soja\", \"peso_cesto\": 60.0, \"data_cadastro\": \"01/01/2024 10:00\"},",
        " {\"id\": 2, \"nome\": \"Milho\", \"peso_cesto\": 20.0, \"data_cadastro\": \"2024-01-01 10:00\"}]",
    );
    std::fs::write(dir.join("produtos.json"), original).unwrap();

    let output = run_freight(home.path(), &[], "3\n1\nCafe\n20\n0\n0\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Produto adicionado com sucesso!"));
    assert!(stderr(&output).contains("produtos.json.bak"));
    let backup = std::fs::read_to_string(dir.join("produtos.json.bak")).unwrap();
    assert_eq!(backup, original);
    let products: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.join("produtos.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(products[0]["nome"], "Cafe");
}

#[test]
fn test_export_failure_is_reported_and_menu_continues() {
    let home = tempfile::tempdir().unwrap();
    let blocker = home.path().join("not_a_dir");
    std::fs::write(&blocker, "x").unwrap();
    let config_path = home.path().join("freight.toml");
    std::fs::write(
        &config_path,
        format!("[export]\ndir = \"{}\"\n", blocker.display()),
    )
    .unwrap();

    let output = run_freight(
        home.path(),
        &["--config", config_path.to_str().unwrap()],
        "6\ns\n\n9\n0\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Erro ao exportar dados"));
    assert!(out.contains("Verifique se você tem permissão para escrever na pasta de exportação."));
    let after_error = out.split("Erro ao exportar dados").nth(1).unwrap();
    assert!(after_error.contains("Opção inválida."));
    assert!(!out.contains("Dados exportados com sucesso"));
}
