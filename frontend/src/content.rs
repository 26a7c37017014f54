//! Static copy for the informational pages.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Program {
    pub id: u32,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub ages: &'static str,
    pub schedules: &'static [&'static str],
    pub features: &'static [&'static str],
    pub icon: &'static str,
    pub background: &'static str,
    pub text_color: &'static str,
}

pub static PROGRAMS: [Program; 4] = [
    Program {
        id: 1,
        name: "Baby Lumen",
        subtitle: "Los primeros mil días marcan la diferencia",
        description: "En Baby Lumen entendemos que cada sonrisa, cada movimiento y cada descubrimiento de tu bebé construye conexiones cerebrales que durarán toda la vida.",
        ages: "Desde los 5 meses a los 3 años",
        schedules: &["Lunes a Viernes: 6:30 AM - 5:30 PM"],
        features: &[
            "Estimulación temprana basada en evidencia",
            "Cuidado amoroso personalizado",
            "Acompañamiento en cada hito del desarrollo",
            "Ambiente seguro y protegido",
            "Conexiones cerebrales para toda la vida",
        ],
        icon: "👶",
        background: "linear-gradient(135deg, #89CFF0 0%, #B0E0E6 100%)",
        text_color: "#0066CC",
    },
    Program {
        id: 2,
        name: "Lumen Kids",
        subtitle: "Transformación y crecimiento integral",
        description: "Entre los 3 y los 6 años, los niños no solo crecen, se transforman. Lumen Kids acompaña esta metamorfosis con un programa integral donde cada logro importa.",
        ages: "Desde los 3 años",
        schedules: &["Lunes a Viernes: 6:30 AM - 5:30 PM"],
        features: &[
            "Desarrollo de autonomía real",
            "Fomento de curiosidad genuina",
            "Resolución de conflictos",
            "Programa integral personalizado",
            "Equipo comprometido y amoroso",
        ],
        icon: "🎨",
        background: "linear-gradient(135deg, #90EE90 0%, #98FB98 100%)",
        text_color: "#228B22",
    },
    Program {
        id: 3,
        name: "Life Lumen",
        subtitle: "Habilidades para el futuro",
        description: "Life Lumen desarrolla lo que el colegio no enseña: inteligencia emocional y financiera, pensamiento lateral y creativo, competencias digitales.",
        ages: "Desde los 6 hasta los 9 años",
        schedules: &["Lunes a Viernes: 1:00 PM - 5:30 PM"],
        features: &[
            "Inteligencia emocional y financiera",
            "Pensamiento lateral y creativo",
            "Competencias digitales",
            "Capacidad de adaptación",
            "Habilidades para el futuro",
        ],
        icon: "🚀",
        background: "linear-gradient(135deg, #FFB6C1 0%, #FFC0CB 100%)",
        text_color: "#C71585",
    },
    Program {
        id: 4,
        name: "Lumen Days",
        subtitle: "Un día para ti, un día inolvidable para ellos",
        description: "Mientras tú recuperas energía, tus hijos viven experiencias que recordarán: desde manualidades divertidas hasta juegos al aire libre.",
        ages: "Desde los 5 meses hasta los 9 años",
        schedules: &[
            "Lunes a Viernes: 6:30 AM - 5:30 PM",
            "Sábado: 7:30 AM - 3:00 PM",
        ],
        features: &[
            "Servicio flexible por días",
            "Actividades y manualidades",
            "Juegos al aire libre",
            "Experiencias memorables",
            "Disponible también los sábados",
        ],
        icon: "🎁",
        background: "linear-gradient(135deg, #FFE4E1 0%, #FFF0F5 100%)",
        text_color: "#DB7093",
    },
];

pub fn program(id: u32) -> Option<&'static Program> {
    PROGRAMS.iter().find(|program| program.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdmissionStep {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub details: &'static [&'static str],
    pub optional: bool,
}

pub static ADMISSION_STEPS: [AdmissionStep; 6] = [
    AdmissionStep {
        id: 1,
        title: "Visitarnos",
        subtitle: "Conoce nuestras instalaciones",
        description: "Agenda una cita para conocer personalmente nuestro jardín, las instalaciones, el equipo docente y nuestra metodología de enseñanza. Incluye pequeño obsequio para que nos recuerdes.",
        icon: "🏫",
        details: &[
            "Recorrido por todas nuestras instalaciones",
            "Conoce a nuestro equipo docente",
            "Espacios acondicionados para cada edad",
            "Hermoso parque al aire libre",
            "Pequeño obsequio de bienvenida",
            "Resolución de todas tus dudas",
        ],
        optional: false,
    },
    AdmissionStep {
        id: 2,
        title: "Registro de Formulario",
        subtitle: "Completa el formulario de inscripción",
        description: "Diligencia el formulario de inscripción con los datos básicos de tu hijo(a) y la familia.",
        icon: "📋",
        details: &[
            "Información personal del niño(a)",
            "Datos de contacto de los padres",
            "Información médica relevante",
        ],
        optional: false,
    },
    AdmissionStep {
        id: 3,
        title: "Día Lumen de Cortesía",
        subtitle: "Experiencia gratuita (Opcional)",
        description: "¡Trae a tu bebé a vivir un día Lumen completamente gratis! Una experiencia para que conozcan nuestra rutina y se sientan en casa. Incluye onces y almuerzo.",
        icon: "🎁",
        details: &[
            "Día completo de actividades",
            "Sin costo alguno",
            "Incluye onces y almuerzo",
            "Experimenta nuestra metodología",
            "Conoce a los compañeritos",
            "Vive la rutina Lumen",
        ],
        optional: true,
    },
    AdmissionStep {
        id: 4,
        title: "Registro de Documentación",
        subtitle: "Entrega de documentos requeridos",
        description: "Presenta la documentación necesaria para formalizar el ingreso de tu hijo(a) a nuestra familia Lumen.",
        icon: "📄",
        details: &[
            "Fotocopia de afiliación a EPS",
            "Registro civil",
            "Carnet de vacunas",
            "Cédula de ciudadanía de acudiente(s)",
            "3 fotos de carnet fondo blanco",
            "Certificado médico",
        ],
        optional: false,
    },
    AdmissionStep {
        id: 5,
        title: "Matrícula y Contrato",
        subtitle: "Formalización del ingreso",
        description: "Firma del contrato de prestación de servicios educativos y pago de matrícula.",
        icon: "✍️",
        details: &[
            "Lectura del contrato de servicios",
            "Firma de documentos legales",
            "Pago de matrícula",
            "Confirmación de inicio de clases",
        ],
        optional: false,
    },
    AdmissionStep {
        id: 6,
        title: "Sesión de Anamnesis",
        subtitle: "Entrevista con la familia",
        description: "Reunión personalizada para conocer a profundidad las necesidades, rutinas y características especiales de tu hijo(a).",
        icon: "👨‍👩‍👧",
        details: &[
            "Entrevista con psicóloga",
            "Historia familiar y médica",
            "Rutinas y hábitos del niño(a)",
            "Necesidades especiales",
        ],
        optional: false,
    },
];

/// Information sheet offered on the admission page
pub const ADMISSION_INFO_PDF: &str = "documents/informacion-admision.pdf";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreValue {
    pub icon: &'static str,
    pub title: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub static VALUES: [CoreValue; 3] = [
    CoreValue {
        icon: "❤️",
        title: "Amor",
        color: "#e74c3c",
        description: "La fuerza que impulsa nuestro trabajo y guía nuestra labor educativa",
    },
    CoreValue {
        icon: "💛",
        title: "Respeto",
        color: "#f39c12",
        description: "Fomentamos el respeto mutuo, la inclusión y la diversidad",
    },
    CoreValue {
        icon: "☀️",
        title: "Autonomía",
        color: "#f1c40f",
        description: "Promovemos la independencia y el desarrollo de habilidades propias en cada niño",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: "🎨",
        title: "Aprendizaje Experiencial",
        description: "Programa educativo innovador que combina enseñanza tradicional con exploración y descubrimiento",
    },
    Feature {
        icon: "🌍",
        title: "Inglés Integrado",
        description: "Clases de inglés como parte integral del programa para desarrollar habilidades comunicativas desde temprana edad",
    },
    Feature {
        icon: "⚽",
        title: "Actividades Integrales",
        description: "Deportes y actividades lúdicas que promueven el desarrollo físico y emocional",
    },
    Feature {
        icon: "🌳",
        title: "Entorno Natural",
        description: "Espacios verdes y seguros que estimulan el aprendizaje en contacto con la naturaleza",
    },
    Feature {
        icon: "👨‍👩‍👧‍👦",
        title: "Atención Personalizada",
        description: "Grupos reducidos para garantizar una educación adaptada a cada niño",
    },
    Feature {
        icon: "✨",
        title: "Precios Justos",
        description: "Educación de calidad accesible para todas las familias",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

pub static TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Santiago",
        emoji: "👨‍💼",
        description: "Cofundador lleno de energía y visión emprendedora. Líder natural apasionado por la tecnología y la innovación educativa.",
    },
    TeamMember {
        name: "María del Pilar",
        emoji: "👩‍💼",
        description: "Cofundadora, ingeniera en sistemas con maestría. Amplia experiencia en gestión de equipos y compromiso con la educación de calidad.",
    },
    TeamMember {
        name: "Diego",
        emoji: "👨‍🏫",
        description: "Cofundador, ingeniero en sistemas con experiencia docente. Visión integral para implementar soluciones tecnológicas y educativas innovadoras.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_program_lookup() {
        assert_eq!(program(3).map(|p| p.name), Some("Life Lumen"));
        assert!(program(9).is_none());
    }

    #[wasm_bindgen_test]
    fn test_only_courtesy_day_is_optional() {
        let optional: Vec<u32> = ADMISSION_STEPS
            .iter()
            .filter(|step| step.optional)
            .map(|step| step.id)
            .collect();
        assert_eq!(optional, vec![3]);
    }
}
