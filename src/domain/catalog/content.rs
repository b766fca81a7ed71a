//! Built-in questionnaire content.
//!
//! The six published "Profano" steps: question labels, option values, slider
//! bounds, and the book passage shown after each step. All user-facing strings
//! are carried verbatim from the published material, including trailing
//! whitespace in some labels and the historical `curpo` question key, so that
//! stored responses keep their original field ids.

use once_cell::sync::Lazy;

use crate::domain::foundation::{DomainError, FieldId, QuestionKey, StepKey, StepOrder};

use super::{
    ButtonChoiceConfig, ChoiceOption, FeedbackPassage, NumericInputConfig, Question,
    QuestionInput, SliderConfig, Step, StepCatalog, VisibilityCondition,
};

static DEFAULT_CATALOG: Lazy<StepCatalog> =
    Lazy::new(|| build_catalog().expect("Built-in catalog must be valid"));

/// Returns the built-in six-step questionnaire catalog.
///
/// Assembled once on first access and validated like any loaded catalog, so
/// callers can rely on contiguous orders and unique keys.
pub fn default_catalog() -> &'static StepCatalog {
    &DEFAULT_CATALOG
}

fn build_catalog() -> Result<StepCatalog, DomainError> {
    StepCatalog::new(vec![
        genero_step()?,
        hijes_step()?,
        gestacion_step()?,
        edad_step()?,
        muerte_step()?,
        morir_step()?,
    ])
}

fn question(key: &str, input: QuestionInput) -> Result<Question, DomainError> {
    Ok(Question::new(QuestionKey::new(key)?, input))
}

fn genero_step() -> Result<Step, DomainError> {
    Step::new(
        StepOrder::try_new(1)?,
        StepKey::new("genero")?,
        vec![question(
            "coincide",
            QuestionInput::Slider(SliderConfig::new(
                "¿En qué medida el género que te asignaron al nacer coincide con el que te autopercibís?",
                "Nada",
                "Totalmente",
            )),
        )?],
        FeedbackPassage::new(GENERO_PASSAGE, BOOK_OF_LIFE),
    )
}

fn hijes_step() -> Result<Step, DomainError> {
    let has_children = FieldId::new("hijes-tenes")?;
    Step::new(
        StepOrder::try_new(2)?,
        StepKey::new("hijes")?,
        vec![
            question(
                "tenes",
                QuestionInput::ButtonChoice(ButtonChoiceConfig::new(
                    "¿Tenés hijes?",
                    vec![
                        ChoiceOption::new("Sí", "1"),
                        ChoiceOption::new("No", "0"),
                    ],
                )),
            )?,
            question(
                "volveria",
                QuestionInput::Slider(SliderConfig::new(
                    "Si pudieras volver el tiempo atrás ¿volverías a tenerlos?",
                    "Seguro que no",
                    "Seguro que sí",
                )),
            )?
            .with_condition(VisibilityCondition::answer_equals(
                has_children.clone(),
                "1",
            )),
            question(
                "gustaria",
                QuestionInput::Slider(SliderConfig::new(
                    "¿Te gustaría tenerlos? ",
                    "Seguro que no",
                    "Seguro que sí",
                )),
            )?
            .with_condition(VisibilityCondition::answer_equals(has_children, "0")),
        ],
        FeedbackPassage::new(HIJES_PASSAGE, BOOK_OF_LIFE),
    )
}

fn gestacion_step() -> Result<Step, DomainError> {
    Step::new(
        StepOrder::try_new(3)?,
        StepKey::new("gestacion")?,
        vec![
            question(
                "aborto",
                QuestionInput::Slider(
                    SliderConfig::new(
                        "¿Hasta qué momento de la gestación te parece que es aceptable hacer un aborto?",
                        "0 semanas",
                        "42 semanas",
                    )
                    .with_bounds(0, 42),
                ),
            )?,
            question(
                "persona",
                QuestionInput::Slider(
                    SliderConfig::new(
                        "¿En qué momento de tu gestación creés que apareciste vos como persona?",
                        "0 semanas",
                        "42 semanas",
                    )
                    .with_bounds(0, 42),
                ),
            )?,
        ],
        FeedbackPassage::new(GESTACION_PASSAGE, BOOK_OF_LIFE),
    )
}

fn edad_step() -> Result<Step, DomainError> {
    Step::new(
        StepOrder::try_new(4)?,
        StepKey::new("edad")?,
        vec![
            question(
                "actual",
                QuestionInput::NumericInput(NumericInputConfig::new("¿Qué edad tenés?").with_min(0)),
            )?,
            question(
                "morir",
                QuestionInput::Slider(
                    SliderConfig::new("¿Hasta qué edad te gustaría vivir?", "0 años", "130 años")
                        .with_bounds(0, 130),
                ),
            )?,
        ],
        FeedbackPassage::new(EDAD_PASSAGE, BOOK_OF_LIFE),
    )
}

fn muerte_step() -> Result<Step, DomainError> {
    Step::new(
        StepOrder::try_new(5)?,
        StepKey::new("muerte")?,
        vec![
            question(
                "experiencia",
                QuestionInput::Slider(SliderConfig::new(
                    "¿Hay experiencia después de la muerte? ",
                    "Seguro que no",
                    "Seguro que sí",
                )),
            )?,
            question(
                "eutanasia",
                QuestionInput::Slider(SliderConfig::new(
                    "¿Te parece que una persona debe tener derecho a acceder a una eutanasia?",
                    "Seguro que no",
                    "Seguro que sí",
                )),
            )?,
        ],
        FeedbackPassage::new(MUERTE_PASSAGE, BOOK_OF_DEATH),
    )
}

fn morir_step() -> Result<Step, DomainError> {
    Step::new(
        StepOrder::try_new(6)?,
        StepKey::new("morir")?,
        vec![
            question(
                "curpo",
                QuestionInput::Slider(SliderConfig::new(
                    "¿Te interesa que pase con tu cuerpo luego de morir? ",
                    "Nada",
                    "Mucho",
                )),
            )?,
            question(
                "redes",
                QuestionInput::Slider(SliderConfig::new(
                    "¿Te interesa qué pase con tus redes sociales luego de morir?",
                    "Nada",
                    "Mucho",
                )),
            )?,
        ],
        FeedbackPassage::new(MORIR_PASSAGE, BOOK_OF_DEATH),
    )
}

// ============================================================================
// Book passages
// ============================================================================

const BOOK_OF_LIFE: &str = "Libro de la vida";
const BOOK_OF_DEATH: &str = "Libro de la muerte";

const GENERO_PASSAGE: &str = "“...durante la pubertad se hacen presentes ciertos cambios físicos. Pero muchas personas perciben que esas características corporales no necesariamente tienen que ver con el género con el que se perciben. Los tratamientos hormonales permiten a las personas transgénero poner en acuerdo su identidad de género autopercibida con estas características corporales.” Libro de la vida";

const HIJES_PASSAGE: &str = "“...Si nacer es uno de los hitos centrales en las trayectorias de vida de los humanos, dar lugar a ese nacimiento —es decir, transitar el parto y lo que le sigue— no se queda muy atrás…”";

const GESTACION_PASSAGE: &str = "“...el problema, más que por la definición del inicio de la vida, podía ser abordado en términos del estatus de un embrión o feto frente al de una persona, es decir, un ser humano.”";

const EDAD_PASSAGE: &str = "“...es imposible conocer el límite máximo de tiempo vivible para los humanos. Lo único que sabemos es que estas personas excepcionales que viven más de 110 años dificilmente llegan a los 120: ese parece ser un límite más o menos razonable.”";

const MUERTE_PASSAGE: &str = "“...la soberanía sobre los cuerpos y, más aún, sobre las existencias, es algo que no puede conquistarse tan fácil. Pero los deseos de la Interrupción Voluntaria de la Vida comienzan a ser identificados y reconocidos por los Estados, que toman nota de la situación y, en algunos casos, ensayan leyes para garantizar nuevos derechos.”";

const MORIR_PASSAGE: &str = "“Entonces, me explica aquello que ya conté: que hoy las personas tienen más miedo a ser enterradas vivas que a morirse. Por ello, muchos piden ser enterrados con el celular…”";
