//! Line-oriented command grammar for the terminal dashboard.

use musica_client::{SearchField, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Switch(Section),
    Refresh,
    Filter(SearchField, String),
    ClearFilters,
    New(Vec<Assignment>),
    Edit(i64, Vec<Assignment>),
    Delete(i64),
    Confirm,
    Cancel,
    Favorites(i64),
    Help,
    Quit,
}

/// One `field=value` pair. Values may span several words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub field: String,
    pub value: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Comando desconocido: {0} (escribe `help`)")]
    Unknown(String),
    #[error("Falta el argumento <{0}>")]
    MissingArgument(&'static str),
    #[error("ID no válido: {0}")]
    InvalidId(String),
    #[error("Filtro desconocido: {0} (titulo, artista, genero, año)")]
    UnknownFilter(String),
    #[error("Se esperaba campo=valor, no «{0}»")]
    BadAssignment(String),
}

pub const HELP: &str = "\
Comandos:
  songs | users | favorites | docs     cambiar de sección
  list | retry                         recargar la sección activa
  filter <titulo|artista|genero|año> [valor]
  clear                                limpiar filtros de canciones
  new campo=valor ...                  crear
  edit <id> campo=valor ...            editar
  delete <id>  luego  yes | no         eliminar con confirmación
  favs <id usuario>                    ver favoritos de un usuario
  help | quit";

pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match head {
        "songs" | "canciones" => Command::Switch(Section::Songs),
        "users" | "usuarios" => Command::Switch(Section::Users),
        "favorites" | "favoritos" => Command::Switch(Section::Favorites),
        "docs" => Command::Switch(Section::Documentation),
        "list" | "retry" => Command::Refresh,
        "clear" => Command::ClearFilters,
        "filter" => {
            let (name, value) = rest
                .split_first()
                .ok_or(CommandError::MissingArgument("campo"))?;
            let field = SearchField::from_param(name)
                .ok_or_else(|| CommandError::UnknownFilter(name.to_string()))?;
            Command::Filter(field, value.join(" "))
        }
        "new" => Command::New(assignments(&rest)?),
        "edit" => {
            let (id, fields) = rest
                .split_first()
                .ok_or(CommandError::MissingArgument("id"))?;
            Command::Edit(parse_id(id)?, assignments(fields)?)
        }
        "delete" => {
            let id = rest.first().ok_or(CommandError::MissingArgument("id"))?;
            Command::Delete(parse_id(id)?)
        }
        "favs" => {
            let id = rest
                .first()
                .ok_or(CommandError::MissingArgument("id usuario"))?;
            Command::Favorites(parse_id(id)?)
        }
        "yes" | "y" | "si" | "sí" => Command::Confirm,
        "no" | "n" => Command::Cancel,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_id(raw: &str) -> Result<i64, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

/// `titulo=Bohemian Rhapsody artista=Queen`: words without `=` extend the
/// previous value.
fn assignments(words: &[&str]) -> Result<Vec<Assignment>, CommandError> {
    let mut out: Vec<Assignment> = Vec::new();
    for word in words {
        match word.split_once('=') {
            Some((field, value)) if !field.is_empty() => out.push(Assignment {
                field: field.to_string(),
                value: value.to_string(),
            }),
            _ => match out.last_mut() {
                Some(last) => {
                    if !last.value.is_empty() {
                        last.value.push(' ');
                    }
                    last.value.push_str(word);
                }
                None => return Err(CommandError::BadAssignment(word.to_string())),
            },
        }
    }
    Ok(out)
}
