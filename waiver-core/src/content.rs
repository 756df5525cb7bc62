use serde::{Deserialize, Serialize};
use std::fmt;

/// The two languages the waiver form is offered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One stage of the submission progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub name: &'static str,
    pub label: &'static str,
}

/// User-facing strings consumed by the core submission logic.
///
/// The full legal document bodies live with the page content; only the
/// strings that validation, the orchestrator, and the progress
/// indicator need are carried here.
pub struct Translations {
    pub validation_full_name: &'static str,
    pub validation_initials: &'static str,
    pub validation_waiver: &'static str,
    pub validation_agreement: &'static str,
    pub validation_signature: &'static str,
    pub success: &'static str,
    pub success_archived: &'static str,
    pub error_not_archived: &'static str,
    pub error_general: &'static str,
    pub processing_title: &'static str,
    pub may_take_seconds: &'static str,
    pub progress_steps: [ProgressStep; 4],
}

static EN: Translations = Translations {
    validation_full_name: "Please enter your full name.",
    validation_initials: "Please enter your initials.",
    validation_waiver: "Please confirm that you have read and understand the Liability Waiver.",
    validation_agreement: "Please confirm that you have read and agree to the Participant Agreement.",
    validation_signature: "Please draw your signature in the box before submitting.",
    success: "Thank you! Your waiver has been signed and saved successfully.",
    success_archived: "Data has been saved to Database.",
    error_not_archived: "Note: Could not save to Database.",
    error_general: "An error occurred while submitting the waiver.",
    processing_title: "Processing Your Submission",
    may_take_seconds: "This may take a few seconds...",
    progress_steps: [
        ProgressStep { name: "Capture", label: "Capturing form data..." },
        ProgressStep { name: "Process", label: "Processing submission..." },
        ProgressStep { name: "Save", label: "Saving to database..." },
        ProgressStep { name: "Done", label: "Almost done..." },
    ],
};

static ES: Translations = Translations {
    validation_full_name: "Por favor ingrese su nombre completo.",
    validation_initials: "Por favor ingrese sus iniciales.",
    validation_waiver: "Por favor confirme que ha leído y entiende la Exención de Responsabilidad.",
    validation_agreement: "Por favor confirme que ha leído y acepta el Acuerdo de Participante.",
    validation_signature: "Por favor dibuje su firma en el cuadro antes de enviar.",
    success: "¡Gracias! Su exención ha sido firmada y guardada con éxito.",
    success_archived: "Los datos se han guardado en la base de datos.",
    error_not_archived: "Nota: No se pudo guardar en la base de datos.",
    error_general: "Ocurrió un error al enviar la exención.",
    processing_title: "Procesando Su Envío",
    may_take_seconds: "Esto puede tomar unos segundos...",
    progress_steps: [
        ProgressStep { name: "Captura", label: "Capturando datos del formulario..." },
        ProgressStep { name: "Proceso", label: "Procesando envío..." },
        ProgressStep { name: "Guardar", label: "Guardando en base de datos..." },
        ProgressStep { name: "Hecho", label: "Casi terminado..." },
    ],
};

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}
