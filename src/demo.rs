//! Built-in sample items shown while no live feed has produced anything.

use chrono::{DateTime, Duration, Utc};

use crate::config::Region;
use crate::model::NewsItem;

struct DemoEntry {
    id: &'static str,
    title: &'static str,
    link: &'static str,
    days_ago: i64,
    source_name: &'static str,
    region: Region,
    tags: &'static [&'static str],
    summary: &'static str,
    image: &'static str,
}

const DEMO_ENTRIES: &[DemoEntry] = &[
    DemoEntry {
        id: "d1",
        title: "UE aprueba reglamento EUDR: nuevas exigencias para exportadores de soja, maíz y cuero argentino",
        link: "https://environment.ec.europa.eu/topics/forests/deforestation/regulation-deforestation-free-products_en",
        days_ago: 1,
        source_name: "European Commission",
        region: Region::UE,
        tags: &["EUDR", "deforestation", "due diligence", "exports/imports"],
        summary: "El Reglamento europeo sobre deforestación exige verificar que los productos no provienen de tierras deforestadas tras 2020. Argentina, gran exportador de soja y cuero, deberá adaptar su trazabilidad o enfrentar cierre de mercados.",
        image: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?w=400&q=80",
    },
    DemoEntry {
        id: "d2",
        title: "SENASA habilita nuevos protocolos de exportación de limones y arándanos frescos a Europa",
        link: "https://www.argentina.gob.ar/senasa",
        days_ago: 2,
        source_name: "SENASA Argentina",
        region: Region::AR,
        tags: &["agriculture", "certification", "exports/imports"],
        summary: "El Servicio Nacional de Sanidad Agroalimentaria aprobó un nuevo protocolo fitosanitario que facilita el ingreso de frutas frescas argentinas al mercado europeo bajo los nuevos estándares vigentes.",
        image: "https://images.unsplash.com/photo-1611735341450-74d61e660ad2?w=400&q=80",
    },
    DemoEntry {
        id: "d3",
        title: "CBAM: el mecanismo de ajuste en frontera de carbono europeo y su impacto en exportaciones industriales",
        link: "https://taxation-customs.ec.europa.eu/carbon-border-adjustment-mechanism_en",
        days_ago: 3,
        source_name: "European Commission",
        region: Region::UE,
        tags: &["CBAM", "sustainability", "exports/imports"],
        summary: "Los importadores europeos de acero, aluminio y fertilizantes deberán reportar emisiones. Argentina exporta fertilizantes y metales a la UE y el CBAM encarecerá productos sin huella de carbono certificada.",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&q=80",
    },
    DemoEntry {
        id: "d4",
        title: "FSC actualiza estándar de cadena de custodia con nuevos requisitos digitales de trazabilidad",
        link: "https://fsc.org",
        days_ago: 4,
        source_name: "FSC Internacional",
        region: Region::Global,
        tags: &["forestry", "certification", "EUDR"],
        summary: "Forest Stewardship Council integró requisitos digitales de trazabilidad en su estándar de chain-of-custody, alineándose con el EUDR y facilitando la verificación de origen para exportadores forestales latinoamericanos.",
        image: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=400&q=80",
    },
    DemoEntry {
        id: "d5",
        title: "ISCC actualiza criterios para biocombustibles: nuevas reglas que afectan al aceite de soja argentino",
        link: "https://www.iscc-system.org",
        days_ago: 5,
        source_name: "ISCC System",
        region: Region::Global,
        tags: &["biofuels/ISCC", "certification", "agriculture"],
        summary: "El sistema ISCC revisó sus criterios de sostenibilidad para biodiesel de soja, incorporando indicadores de biodiversidad y derechos laborales. Productores argentinos certificados deben adaptar su documentación antes de 2025.",
        image: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=400&q=80",
    },
    DemoEntry {
        id: "d6",
        title: "OMC alerta: proliferación de barreras paraarancelarias de trazabilidad afecta a exportadores del sur global",
        link: "https://www.wto.org",
        days_ago: 6,
        source_name: "WTO / OMC",
        region: Region::Global,
        tags: &["trade", "exports/imports", "due diligence"],
        summary: "Un informe de la OMC señala que el G20 incrementó medidas no arancelarias vinculadas a trazabilidad y sostenibilidad, creando barreras de facto para exportadores de países en desarrollo, con impacto directo en Argentina.",
        image: "https://images.unsplash.com/photo-1526304640581-d334cdbbf45e?w=400&q=80",
    },
    DemoEntry {
        id: "d7",
        title: "Cancillería Argentina avanza en reconocimiento mutuo de certificaciones orgánicas con la UE",
        link: "https://www.cancilleria.gob.ar",
        days_ago: 7,
        source_name: "Cancillería Argentina",
        region: Region::AR,
        tags: &["organic", "certification", "exports/imports"],
        summary: "El Ministerio de Relaciones Exteriores negocia un acuerdo de equivalencia con la UE para que certificaciones orgánicas argentinas sean reconocidas directamente, reduciendo costos de doble certificación para productores.",
        image: "https://images.unsplash.com/photo-1464226184884-fa280b87c399?w=400&q=80",
    },
    DemoEntry {
        id: "d8",
        title: "CSRD: la directiva europea de reportes de sostenibilidad alcanza a proveedores argentinos de multinacionales",
        link: "https://finance.ec.europa.eu",
        days_ago: 9,
        source_name: "European Commission",
        region: Region::UE,
        tags: &["CSRD", "sustainability", "due diligence"],
        summary: "La Directiva CSRD obliga a grandes empresas europeas a reportar el impacto ambiental y social de su cadena de valor completa. Empresas argentinas que abastecen a grupos europeos serán alcanzadas indirectamente.",
        image: "https://images.unsplash.com/photo-1486325212027-8081e485255e?w=400&q=80",
    },
    DemoEntry {
        id: "d9",
        title: "USDA endurece controles de miel importada: Argentina deberá reforzar trazabilidad de origen",
        link: "https://www.fas.usda.gov",
        days_ago: 11,
        source_name: "USDA / FAS",
        region: Region::USA,
        tags: &["agriculture", "exports/imports", "certification"],
        summary: "El Departamento de Agricultura de EE.UU. exige trazabilidad completa de origen en miel importada. Argentina es exportador mundial clave y deberá ajustar su documentación para mantener acceso al mercado norteamericano.",
        image: "https://images.unsplash.com/photo-1558642452-9d2a7deb7f62?w=400&q=80",
    },
    DemoEntry {
        id: "d10",
        title: "FAO: deforestación en Sudamérica amenaza el cumplimiento de estándares internacionales de exportación",
        link: "https://www.fao.org",
        days_ago: 14,
        source_name: "FAO",
        region: Region::Global,
        tags: &["deforestation", "agriculture", "forestry", "EUDR"],
        summary: "La FAO advierte que el ritmo de deforestación en América del Sur podría comprometer la capacidad regional para cumplir con las exigencias del EUDR y otros estándares internacionales de sostenibilidad en los próximos años.",
        image: "https://images.unsplash.com/photo-1448375240586-882707db888b?w=400&q=80",
    },
    DemoEntry {
        id: "d11",
        title: "Textiles reciclados: nuevas certificaciones globales que impactan en la cadena de valor del algodón argentino",
        link: "https://www.epa.gov",
        days_ago: 17,
        source_name: "EPA",
        region: Region::USA,
        tags: &["textiles", "recycled", "certification", "sustainability"],
        summary: "La EPA creó un sello para textiles con contenido reciclado mínimo del 30%. El programa podría convertirse en requisito de compras federales, afectando exportaciones de indumentaria y algodón argentinos a Estados Unidos.",
        image: "https://images.unsplash.com/photo-1558769132-cb1aea458c5e?w=400&q=80",
    },
    DemoEntry {
        id: "d12",
        title: "IFOAM lanza guía para pequeños productores sobre certificaciones orgánicas internacionales",
        link: "https://www.ifoam.bio",
        days_ago: 20,
        source_name: "IFOAM Organics",
        region: Region::Global,
        tags: &["organic", "agriculture", "certification"],
        summary: "La organización global de agricultura orgánica publicó un manual práctico para que pequeñas y medianas explotaciones agropecuarias puedan acceder a certificaciones internacionales y mercados premium europeos y asiáticos.",
        image: "https://images.unsplash.com/photo-1500651230702-0e2d8a49d4ad?w=400&q=80",
    },
];

/// Sample items dated relative to `now`.
pub fn demo_items(now: DateTime<Utc>) -> Vec<NewsItem> {
    DEMO_ENTRIES
        .iter()
        .map(|entry| NewsItem {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            link: entry.link.to_string(),
            published_at: now - Duration::days(entry.days_ago),
            source_name: entry.source_name.to_string(),
            source_region: entry.region,
            tags: entry.tags.iter().map(|t| t.to_string()).collect(),
            summary: entry.summary.to_string(),
            image: Some(entry.image.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_items_are_recent_and_unique() {
        let now = Utc::now();
        let items = demo_items(now);
        assert_eq!(items.len(), 12);

        let links: HashSet<&str> = items.iter().map(|i| i.link.as_str()).collect();
        assert_eq!(links.len(), items.len());
        assert!(items.iter().all(|i| i.published_at < now));
        assert!(items.iter().all(|i| now - i.published_at <= Duration::days(30)));
    }
}
