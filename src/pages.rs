//! Dynamic page rendering.
//!
//! Wraps a content fragment in the shared portal chrome (header, nav,
//! footer) and stamps the status code. Every untrusted string — form
//! fields, request paths, error text — passes through [`escape`] before it
//! reaches markup. Rendering itself cannot fail; a failure here would be a
//! bug, not a runtime condition.

use std::borrow::Cow;

use http::StatusCode;

use crate::response::Response;

/// Escapes `&`, `<`, `>` and both quote characters.
pub fn escape(unsafe_text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(unsafe_text)
}

/// A full HTML document: shared chrome around `main`, with the given status.
///
/// `title` and `main` are markup authored by this module — callers escape
/// any user input before it gets here.
pub fn page(status: StatusCode, title: &str, main: &str) -> Response {
    let html = format!(
        r#"<!doctype html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <title>{title} | AgroTrack</title>
  <link rel="stylesheet" href="/estilos.css">
</head>
<body>
  <header>
    <h1>AgroTrack</h1>
    <nav>
      <a href="/">Inicio</a>
      <a href="/productos.html">Productos</a>
      <a href="/contacto">Contacto</a>
      <a href="/login">Login</a>
    </nav>
  </header>
  <main>
{main}
  </main>
  <footer>
    <p>© 2025 AgroTrack | Tecnología e Innovación Agroindustrial</p>
  </footer>
</body>
</html>"#,
    );
    Response::html(status, html)
}

/// 404 page naming what was asked for (path, or `METHOD /path` for
/// unsupported methods). Diagnostic only — nothing routes on it.
pub fn not_found(requested: &str) -> Response {
    let main = format!(
        r#"    <h2>404 - Página no encontrada</h2>
    <p>La ruta <strong>{}</strong> no existe en nuestro servidor.</p>
    <p><a href="/" class="btn">Volver al inicio</a></p>"#,
        escape(requested),
    );
    page(StatusCode::NOT_FOUND, "404 - Página no encontrada", &main)
}

/// 500 page carrying the (escaped) error description.
pub fn server_error(detail: &str) -> Response {
    let main = format!(
        r#"    <h2>500 - Error interno del servidor</h2>
    <p>Ha ocurrido un error inesperado al procesar su solicitud.</p>
    <pre>{}</pre>
    <p><a href="/" class="btn">Volver al inicio</a></p>"#,
        escape(detail),
    );
    page(StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor", &main)
}

/// 413 rejection for an over-cap request body. Plain text, and the
/// connection is closed — nothing further is read from it.
pub fn payload_too_large() -> Response {
    Response::text(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large").close_connection()
}

/// Echo page for the login demo. Shows both submitted values verbatim
/// (escaped); no credential checking happens anywhere.
pub fn login_echo(usuario: &str, clave: &str) -> Response {
    let main = format!(
        r#"    <h2>Datos recibidos</h2>
    <div class="card">
      <p><strong>Usuario:</strong> {}</p>
      <p><strong>Clave:</strong> {}</p>
    </div>
    <p><a href="/login" class="btn">Volver al login</a></p>"#,
        escape(usuario),
        escape(clave),
    );
    page(StatusCode::OK, "Resultado del login", &main)
}

/// Confirmation page after a contact submission is persisted.
pub fn contact_received(nombre: &str, email: &str, mensaje: &str) -> Response {
    let main = format!(
        r#"    <h2>¡Gracias por su consulta!</h2>
    <div class="card">
      <p>Hemos recibido su mensaje correctamente.</p>
      <p><strong>Nombre:</strong> {}</p>
      <p><strong>Email:</strong> {}</p>
      <p><strong>Mensaje:</strong> {}</p>
    </div>
    <p><a href="/" class="btn">Volver al inicio</a></p>"#,
        escape(nombre),
        escape(email),
        escape(mensaje),
    );
    page(StatusCode::OK, "Gracias por su consulta", &main)
}

/// Listing of the raw contact log, or a placeholder when nothing has been
/// submitted yet. Always 200 — an empty log is not an error.
pub fn contact_list(log: &str) -> Response {
    let body = if log.trim().is_empty() {
        "<p>Aún no hay consultas registradas.</p>".to_owned()
    } else {
        format!("<pre>{}</pre>", escape(log))
    };
    let main = format!(
        r#"    <h2>Consultas recibidas</h2>
    <div class="card">
      {body}
    </div>
    <p><a href="/contacto" class="btn">Volver al formulario</a></p>"#,
    );
    page(StatusCode::OK, "Consultas recibidas", &main)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_str(res: Response) -> String {
        String::from_utf8(res.body().to_vec()).unwrap()
    }

    #[test]
    fn not_found_names_the_request() {
        let res = not_found("/no-such-file.xyz");
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(body_str(res).contains("/no-such-file.xyz"));
    }

    #[test]
    fn markup_in_user_input_is_escaped_everywhere() {
        let hostile = r#"<script>alert("x")&'</script>"#;

        for res in [
            not_found(hostile),
            server_error(hostile),
            login_echo(hostile, hostile),
            contact_received(hostile, hostile, hostile),
            contact_list(hostile),
        ] {
            let body = body_str(res);
            assert!(!body.contains("<script>"), "raw markup leaked: {body}");
            assert!(body.contains("&lt;script&gt;"));
            assert!(body.contains("&quot;"));
            assert!(body.contains("&amp;"));
        }
    }

    #[test]
    fn empty_log_lists_the_placeholder() {
        for log in ["", "   \n"] {
            let res = contact_list(log);
            assert_eq!(res.status(), StatusCode::OK);
            assert!(body_str(res).contains("Aún no hay consultas registradas."));
        }
    }

    #[test]
    fn nonempty_log_is_shown_preformatted() {
        let res = contact_list("---\nFecha: hoy\nNombre: Ana\n");
        let body = body_str(res);
        assert!(body.contains("<pre>"));
        assert!(body.contains("Nombre: Ana"));
    }

    #[test]
    fn rejection_for_oversized_bodies_is_plain_text() {
        let res = payload_too_large();
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(res.body(), b"Payload too large");
    }
}
