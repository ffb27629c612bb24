//! The feature schema: names and column order shared by training and serving.
//!
//! Any change here (add, remove, rename, reorder) invalidates every trained
//! model.

use std::fmt;

/// Number of features in the schema.
pub const FEATURE_COUNT: usize = 30;

/// One column of the feature schema. Declaration order is column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    UsoIp,
    UrlLargo,
    UrlCorto,
    SimboloArroba,
    Redireccion,
    PrefijoSufijo,
    SubDominio,
    Https,
    ExpiracionCreacionDominio,
    Icono,
    NoPuertoStd,
    HttpsUrlDominio,
    UrlRespuesta,
    UrlAnclaje,
    ScriptEnlaceEnEtiquetas,
    ControladorFormulariosServidor,
    InformacionCorreo,
    UrlAnormal,
    ReenvioSitiosWeb,
    BarraEstadoPersonalizado,
    DeshabilitacionClicDerecho,
    UsoVentanaEmergente,
    RedireccionMarcoFlotante,
    EdadDeDominio,
    GrabacionDns,
    TraficoSitioWeb,
    RangoPagina,
    IndiceGoogle,
    EnlacesApuntanPagina,
    ReporteEstadisticas,
}

impl Feature {
    /// All features in column order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::UsoIp,
        Feature::UrlLargo,
        Feature::UrlCorto,
        Feature::SimboloArroba,
        Feature::Redireccion,
        Feature::PrefijoSufijo,
        Feature::SubDominio,
        Feature::Https,
        Feature::ExpiracionCreacionDominio,
        Feature::Icono,
        Feature::NoPuertoStd,
        Feature::HttpsUrlDominio,
        Feature::UrlRespuesta,
        Feature::UrlAnclaje,
        Feature::ScriptEnlaceEnEtiquetas,
        Feature::ControladorFormulariosServidor,
        Feature::InformacionCorreo,
        Feature::UrlAnormal,
        Feature::ReenvioSitiosWeb,
        Feature::BarraEstadoPersonalizado,
        Feature::DeshabilitacionClicDerecho,
        Feature::UsoVentanaEmergente,
        Feature::RedireccionMarcoFlotante,
        Feature::EdadDeDominio,
        Feature::GrabacionDns,
        Feature::TraficoSitioWeb,
        Feature::RangoPagina,
        Feature::IndiceGoogle,
        Feature::EnlacesApuntanPagina,
        Feature::ReporteEstadisticas,
    ];

    /// Columns removed from the reduced-feature dataset variant.
    pub const REDUCED_DROPPED: [Feature; 6] = [
        Feature::UsoIp,
        Feature::Https,
        Feature::NoPuertoStd,
        Feature::PrefijoSufijo,
        Feature::EnlacesApuntanPagina,
        Feature::HttpsUrlDominio,
    ];

    /// Column name as stored in datasets and model artifacts.
    pub const fn name(self) -> &'static str {
        match self {
            Feature::UsoIp => "UsoIP",
            Feature::UrlLargo => "URLLargo",
            Feature::UrlCorto => "URLCorto",
            Feature::SimboloArroba => "SimboloArroba",
            Feature::Redireccion => "Redireccion",
            Feature::PrefijoSufijo => "PrefijoSufijo",
            Feature::SubDominio => "SubDominio",
            Feature::Https => "HTTPS",
            Feature::ExpiracionCreacionDominio => "ExpiracionCreacionDominio",
            Feature::Icono => "Icono",
            Feature::NoPuertoStd => "NoPuertoStd",
            Feature::HttpsUrlDominio => "HTTPSURLDominio",
            Feature::UrlRespuesta => "URLRespuesta",
            Feature::UrlAnclaje => "URLAnclaje",
            Feature::ScriptEnlaceEnEtiquetas => "ScriptEnlaceEnEtiquetas",
            Feature::ControladorFormulariosServidor => "ControladorFormulariosServidor",
            Feature::InformacionCorreo => "InformacionCorreo",
            Feature::UrlAnormal => "URLAnormal",
            Feature::ReenvioSitiosWeb => "ReenvioSitiosWeb",
            Feature::BarraEstadoPersonalizado => "BarraEstadoPersonalizado",
            Feature::DeshabilitacionClicDerecho => "DeshabilitacionClicDerecho",
            Feature::UsoVentanaEmergente => "UsoVentanaEmergente",
            Feature::RedireccionMarcoFlotante => "RedireccionMarcoFlotante",
            Feature::EdadDeDominio => "EdadDeDominio",
            Feature::GrabacionDns => "GrabacionDNS",
            Feature::TraficoSitioWeb => "TraficoSitioWeb",
            Feature::RangoPagina => "RangoPagina",
            Feature::IndiceGoogle => "IndiceGoogle",
            Feature::EnlacesApuntanPagina => "EnlacesApuntanPagina",
            Feature::ReporteEstadisticas => "ReporteEstadisticas",
        }
    }

    /// Position of this feature in the schema.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a feature by its exact column name.
    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Features that need WHOIS, DNS, ranking or page content. A lexical
    /// extractor always emits 0 for these.
    pub const fn is_reserved(self) -> bool {
        matches!(
            self,
            Feature::ExpiracionCreacionDominio
                | Feature::Icono
                | Feature::UrlRespuesta
                | Feature::ScriptEnlaceEnEtiquetas
                | Feature::ControladorFormulariosServidor
                | Feature::BarraEstadoPersonalizado
                | Feature::DeshabilitacionClicDerecho
                | Feature::UsoVentanaEmergente
                | Feature::RedireccionMarcoFlotante
                | Feature::EdadDeDominio
                | Feature::GrabacionDns
                | Feature::TraficoSitioWeb
                | Feature::RangoPagina
                | Feature::IndiceGoogle
                | Feature::ReporteEstadisticas
        )
    }

    /// Column names in order, optionally without the reduced-variant drops.
    pub fn column_names(reduced: bool) -> Vec<&'static str> {
        Feature::ALL
            .into_iter()
            .filter(|f| !reduced || !Feature::REDUCED_DROPPED.contains(f))
            .map(Feature::name)
            .collect()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
