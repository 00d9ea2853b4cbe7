//! Copy of the ten Clasy investor slides.

use super::model::{
    Block, Card, Column, MarketTier, Member, Segment, SlideContent, Stat, Step,
};

use Segment::{Accent, Plain, Strong};

fn card(icon: &'static str, title: &'static str, body: &'static str) -> Card {
    Card {
        icon,
        title,
        body: vec![Plain(body)],
    }
}

fn stat(value: &'static str, label: &'static str) -> Stat {
    Stat { value, label }
}

pub fn cover() -> SlideContent {
    SlideContent::new(vec![
        Block::Pill("Investor Deck · 2025"),
        Block::Wordmark("Clasy"),
        Block::Tagline(
            "Marketplace que profesionaliza las tutorías universitarias mediante conexión verificada y contenido híbrido escalable.",
        ),
        Block::Stats(vec![
            stat("1.2M", "Estudiantes en Chile"),
            stat("B2B2C", "Modelo de crecimiento"),
            stat("AWS", "Cloud-native · 100%"),
        ]),
    ])
}

pub fn problem() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("El Problema"),
        Block::Heading(vec![
            Plain("El mercado de tutorías es "),
            Accent("informal y riesgoso"),
        ]),
        Block::Divider,
        Block::Cards(vec![
            card(
                "😰",
                "Alumnos contratan a ciegas",
                "Se contactan por WhatsApp o Instagram sin garantía de calidad, arriesgando su rendimiento en ramos críticos.",
            ),
            card(
                "⏳",
                "Tutores atrapados en lo operativo",
                "Gestionan cobros, agendas y links manualmente en lugar de enseñar. Alta fricción = bajo volumen de clases.",
            ),
            card(
                "🔗",
                "Oferta fragmentada y opaca",
                "No existe estándar de calidad. Cualquiera se anuncia como tutor sin filtro académico ni verificación real.",
            ),
            card(
                "💸",
                "Transacciones sin protección",
                "Pagos en efectivo o transferencia directa. El alumno paga sin garantía de recibir el servicio contratado.",
            ),
        ]),
    ])
}

pub fn solution() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("La Solución"),
        Block::Heading(vec![
            Accent("Conexión verificada"),
            Plain(" + automatización total del flujo"),
        ]),
        Block::Divider,
        Block::Cards(vec![
            card(
                "✅",
                "Filtro de Talento Estricto",
                "Centralizamos la oferta y verificamos académicamente a cada tutor antes de habilitarlo en la plataforma.",
            ),
            card(
                "⚡",
                "Flujo 100% Automatizado",
                "Agendamiento, cobros y aula virtual en una sola plataforma. Cero fricción para alumnos y tutores.",
            ),
            card(
                "🔒",
                "Seguridad Transaccional",
                "Pagos custodiados, confirmación de sesión y sistema de reseñas. El alumno siempre está protegido.",
            ),
        ]),
        Block::Highlight(vec![
            Strong("Resultado: "),
            Plain("Los mejores tutores universitarios, al alcance de cualquier alumno, con la misma facilidad que pedir un delivery."),
        ]),
    ])
}

pub fn product() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("El Producto"),
        Block::Heading(vec![Plain("Tres "), Accent("modalidades"), Plain(" de aprendizaje")]),
        Block::Divider,
        Block::Columns(vec![
            Column {
                title: "🎙️ Clases Particulares en Vivo",
                body: vec![Plain(
                    "Tutorías 1 a 1 para resolución quirúrgica de dudas del ramo. El alumno elige modalidad online o presencial según su preferencia.",
                )],
                badges: vec!["1 a 1", "Online", "Presencial"],
                footnote: None,
            },
            Column {
                title: "🎬 Contenido Grabado",
                body: vec![Plain(
                    "Cápsulas de micro-learning, guías y material de estudio disponible 24/7. Mantienen la retención cuando no hay clases en vivo programadas.",
                )],
                badges: vec!["Cápsulas", "Guías", "24/7"],
                footnote: None,
            },
            Column {
                title: "👥 Clases Masivas",
                body: vec![Plain(
                    "El tutor publica un horario y múltiples alumnos se inscriben. Mayor accesibilidad para el estudiante, mayor alcance para el profesor.",
                )],
                badges: vec!["Grupal", "Agenda Pública", "Escalable"],
                footnote: None,
            },
        ]),
        Block::Features(vec![
            ("📅", "Agendamiento"),
            ("💳", "Cobros Integrados"),
            ("🖥️", "Aula Virtual"),
            ("📚", "Material de Estudio"),
        ]),
    ])
}

pub fn market() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("Tamaño de Mercado"),
        Block::Heading(vec![Plain("Una oportunidad "), Accent("masiva y subatendida")]),
        Block::Divider,
        Block::Market(vec![
            MarketTier {
                label: "TAM",
                figure: "LATAM",
                text: "Mercado global de tutorías y EdTech en Latinoamérica. Segmento en aceleración post-pandemia.",
            },
            MarketTier {
                label: "SAM",
                figure: "1.2M Chile",
                text: "1.2 millones de estudiantes de educación superior en Chile que enfrentan ramos filtro cada semestre.",
            },
            MarketTier {
                label: "SOM",
                figure: "STEM SGO+VPO",
                text: "Alumnos de carreras STEM en universidades de Santiago y Valparaíso. Nuestro beachhead inicial.",
            },
        ]),
    ])
}

pub fn go_to_market() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("Go-To-Market y Tracción"),
        Block::Heading(vec![
            Plain("Redes "),
            Accent("Atómicas"),
            Plain(" + Alianzas B2B2C"),
        ]),
        Block::Divider,
        Block::Columns(vec![
            Column {
                title: "⚛️ Estrategia de Red Atómica",
                body: vec![
                    Plain("Conquistamos de forma quirúrgica "),
                    Strong("1 Facultad + Ramos críticos"),
                    Plain(" a la vez. Probamos liquidez antes de escalar a la siguiente red."),
                ],
                badges: vec!["1 Facultad", "Ramos Críticos", "Liquidez Primero"],
                footnote: None,
            },
            Column {
                title: "🤝 Modelo B2B2C",
                body: vec![
                    Plain("Alianzas con "),
                    Strong("Centros de Estudiantes y Federaciones"),
                    Plain(" (ej: FEPUCV) para validación institucional y captación masiva a bajo costo."),
                ],
                badges: vec!["FEPUCV", "FEUC", "CAc"],
                footnote: None,
            },
        ]),
        Block::Cards(vec![
            card(
                "🎯",
                "CAC reducido",
                "Validación institucional lleva el costo de adquisición al mínimo",
            ),
            card(
                "🌊",
                "Efecto de red",
                "Más tutores → mejor oferta → más alumnos → más tutores",
            ),
            card(
                "📈",
                "Playbook replicable",
                "Mismo modelo, mismo proceso en cada nueva facultad",
            ),
        ]),
    ])
}

pub fn business_model() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("Modelo de Negocios"),
        Block::Heading(vec![Accent("Service fee"), Plain(" sobre cada transacción")]),
        Block::Divider,
        Block::Columns(vec![
            Column {
                title: "🎙️ Clases en Vivo — 15% fee",
                body: vec![Plain(
                    "Los tutores publican su servicio y fijan su precio. Clasy cobra un 15% adicional al alumno sobre el precio del profesor por cada clase particular o masiva agendada y pagada en la plataforma.",
                )],
                badges: Vec::new(),
                footnote: Some("El tutor recibe el 100% de su precio · Clasy cobra al alumno"),
            },
            Column {
                title: "🎬 Contenido Grabado — 25% fee",
                body: vec![Plain(
                    "Los tutores publican cápsulas, guías y material de estudio. Clasy cobra un 25% sobre el precio del contenido. Mayor margen por la escalabilidad infinita del inventario digital.",
                )],
                badges: Vec::new(),
                footnote: Some("Inventario infinito · alto margen · disponible 24/7"),
            },
        ]),
        Block::Stats(vec![
            stat("15%", "Fee en vivo"),
            stat("25%", "Fee grabado"),
            stat("~0", "Costo marginal"),
            stat("∞", "Escalabilidad"),
        ]),
    ])
}

pub fn competitive_advantage() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("Ventaja Competitiva"),
        Block::Heading(vec![Plain("Por qué "), Accent("Clasy"), Plain(" gana")]),
        Block::Divider,
        Block::Cards(vec![
            card(
                "🌊",
                "Efecto de Red",
                "Cada tutor y alumno que se suma hace la plataforma más valiosa para todos. Más oferta atrae más demanda, y viceversa. La red se defiende sola.",
            ),
            card(
                "🎯",
                "Hiper-especialización Vertical",
                "No hacemos \"clases de matemáticas\". Hacemos clases particulares del ramo Z en la universidad Y. Oferta segmentada de universidad a curso que nadie más tiene.",
            ),
            card(
                "⚙️",
                "Arquitectura Escalable",
                "Verticalmente especializada pero con una arquitectura diseñada para escalar. El mismo motor replica el modelo en cualquier universidad, facultad o país.",
            ),
        ]),
        Block::Highlight(vec![
            Strong("Moat: "),
            Plain("Efecto de red + datos de rendimiento académico + oferta hiper-segmentada por universidad y ramo = barrera de entrada creciente con cada sesión agendada."),
        ]),
    ])
}

pub fn team() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("Equipo"),
        Block::Heading(vec![Plain("Founders que "), Accent("vivieron el problema")]),
        Block::Divider,
        Block::Team(vec![
            Member {
                initial: 'M',
                name: "Mati",
                role: "CTO · Co-founder · UC",
                bio: "Co-creador de Clasy. Ingeniero UC que hacía clases particulares y vivió el problema en carne propia. Lidera la arquitectura cloud-native en AWS.",
            },
            Member {
                initial: 'L',
                name: "Lucas",
                role: "Eng. Lead · Co-founder · UC",
                bio: "Co-creador de Clasy. Ingeniero UC y ex-tutor. A diferencia de muchos equipos dev, Mati y Lucas entienden el problema porque lo vivieron como profesores.",
            },
            Member {
                initial: 'A',
                name: "Adrián",
                role: "Growth & Redes",
                bio: "Creador de Alianza Emprende Chile, una de las redes de emprendimiento universitario más grandes de LATAM. Infinitos contactos en redes estudiantiles. Emprendedor y líder de producto en startups.",
            },
            Member {
                initial: 'S',
                name: "Seba",
                role: "Strategy & Inversiones",
                bio: "Emprendedor, inversor y asesor estratégico. Visión de negocio, red de contactos clave y experiencia en levantamiento de capital.",
            },
        ]),
        Block::Highlight(vec![
            Strong("Founder-problem fit: "),
            Plain("Mati y Lucas crearon Clasy porque hacían clases y vivían la fricción del mercado informal. Adrián trae la red de contactos universitarios más grande del país para ejecutar las atomic networks."),
        ]),
    ])
}

pub fn next_steps() -> SlideContent {
    SlideContent::new(vec![
        Block::Label("Próximos Pasos"),
        Block::Heading(vec![Plain("El camino a "), Accent("escala")]),
        Block::Divider,
        Block::Steps(vec![
            Step {
                number: 1,
                title: "Saturar oferta de tutores — Red Atómica Piloto",
                text: "Liquidez demostrable en la primera facultad: suficientes tutores verificados para cubrir cualquier ramo crítico en menos de 24h.",
            },
            Step {
                number: 2,
                title: "Demostrar métricas de liquidez y retención",
                text: "Tasa de agendamiento, NPS y retención entre sesiones. Proof of concept sólido para el levantamiento de capital.",
            },
            Step {
                number: 3,
                title: "Levantamiento de capital — Pre-Seed",
                text: "Capital para expandir el modelo a nuevas facultades y universidades en Santiago y Valparaíso.",
            },
            Step {
                number: 4,
                title: "Expansión a nuevas redes atómicas",
                text: "Replicar el playbook probado facultad por facultad. Crecimiento sistemático y predecible a nivel nacional.",
            },
        ]),
        Block::Pill("clasy.cl · contacto@clasy.cl"),
    ])
}
