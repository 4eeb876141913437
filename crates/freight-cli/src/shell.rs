//! Interactive menu loop.
//!
//! The loop is a small state machine: [`Screen`] is the menu being shown, the
//! typed choice drives [`Screen::transition`], and the resulting [`Action`] is
//! dispatched to a command handler. End of input behaves like `0` on every
//! screen, so a closed stdin walks back out to the exit.

use freight_core::FreightError;

use crate::app::App;
use crate::commands::{self, calculate, export, ledger};
use crate::prompt::InputClosed;
use crate::ui::{header, print_error, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Property,
    Vehicle,
    Product,
}

impl EntityKind {
    fn menu_title(self) -> &'static str {
        match self {
            Self::Property => "Propriedades Rurais",
            Self::Vehicle => "Veículos de Transporte",
            Self::Product => "Produtos Agrícolas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Entity(EntityKind),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add(EntityKind),
    Edit(EntityKind),
    Remove(EntityKind),
    List(EntityKind),
    Calculate,
    ListCalculations,
    Export,
    InvalidChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: Screen,
    pub action: Option<Action>,
}

impl Transition {
    fn to(next: Screen) -> Self {
        Self { next, action: None }
    }

    fn run(next: Screen, action: Action) -> Self {
        Self {
            next,
            action: Some(action),
        }
    }
}

const MAIN_TITLE: &str = "Simulador de Logística de Transporte Rural";

const MAIN_OPTIONS: [&str; 7] = [
    "1. Gerenciar Propriedades Rurais",
    "2. Gerenciar Veículos de Transporte",
    "3. Gerenciar Produtos Agrícolas",
    "4. Realizar Cálculo de Transporte",
    "5. Listar Cálculos Realizados",
    "6. Exportar Todos os Dados",
    "0. Sair",
];

const ENTITY_OPTIONS: [&str; 5] = [
    "1. Adicionar",
    "2. Alterar",
    "3. Remover",
    "4. Listar",
    "0. Voltar",
];

impl Screen {
    /// Next screen for `choice`; `None` means input has ended.
    pub fn transition(self, choice: Option<&str>) -> Transition {
        let choice = choice.map(str::trim);
        match self {
            Screen::Main => match choice {
                None | Some("0") => Transition::to(Screen::Exit),
                Some("1") => Transition::to(Screen::Entity(EntityKind::Property)),
                Some("2") => Transition::to(Screen::Entity(EntityKind::Vehicle)),
                Some("3") => Transition::to(Screen::Entity(EntityKind::Product)),
                Some("4") => Transition::run(Screen::Main, Action::Calculate),
                Some("5") => Transition::run(Screen::Main, Action::ListCalculations),
                Some("6") => Transition::run(Screen::Main, Action::Export),
                Some(_) => Transition::run(Screen::Main, Action::InvalidChoice),
            },
            Screen::Entity(kind) => match choice {
                None | Some("0") => Transition::to(Screen::Main),
                Some("1") => Transition::run(self, Action::Add(kind)),
                Some("2") => Transition::run(self, Action::Edit(kind)),
                Some("3") => Transition::run(self, Action::Remove(kind)),
                Some("4") => Transition::run(self, Action::List(kind)),
                Some(_) => Transition::to(self),
            },
            Screen::Exit => Transition::to(Screen::Exit),
        }
    }

    /// Menu text for this screen.
    pub fn menu(self, ctx: &UiContext) -> String {
        let (title, options): (&str, &[&str]) = match self {
            Screen::Main => (MAIN_TITLE, &MAIN_OPTIONS),
            Screen::Entity(kind) => (kind.menu_title(), &ENTITY_OPTIONS),
            Screen::Exit => return String::new(),
        };
        let mut lines = vec![header(ctx, title)];
        lines.extend(options.iter().map(|option| option.to_string()));
        lines.join("\n")
    }
}

/// Run menus until the user exits or input ends.
pub fn run(app: &mut App) -> anyhow::Result<()> {
    let mut screen = Screen::Main;
    while screen != Screen::Exit {
        println!("{}", screen.menu(&app.ui));
        let choice = app.prompter.read_line("Escolha uma opção")?;
        let transition = screen.transition(choice.as_deref());

        if let Some(action) = transition.action {
            let outcome = dispatch(app, action);
            app.flush_warnings();
            if let Err(err) = outcome {
                if err.is::<InputClosed>() {
                    break;
                }
                match err.downcast_ref::<FreightError>() {
                    Some(core) => print_error(&app.ui, &core.to_string(), None),
                    None => return Err(err),
                }
            }
        }
        screen = transition.next;
    }
    Ok(())
}

fn dispatch(app: &mut App, action: Action) -> anyhow::Result<()> {
    match action {
        Action::Add(kind) => commands::add(app, kind),
        Action::Edit(kind) => commands::edit(app, kind),
        Action::Remove(kind) => commands::remove(app, kind),
        Action::List(kind) => commands::list(app, kind),
        Action::Calculate => calculate::run(app),
        Action::ListCalculations => ledger::run(app),
        Action::Export => export::run(app),
        Action::InvalidChoice => {
            println!("Opção inválida.");
            Ok(())
        }
    }
}
